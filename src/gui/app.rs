//! Interest Application Main Window
//! Input row on top, results table and buttons on the left, chart on the right.

use crate::config::AppConfig;
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction, ResultsTable, Session, Theme};
use egui::{CentralPanel, SidePanel, TopBottomPanel};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};

const RESULTS_PANEL_WIDTH: f32 = 260.0;
/// Height kept free below the table for the three buttons
const BUTTONS_HEIGHT: f32 = 120.0;

/// Main application window.
pub struct InterestApp {
    config: AppConfig,
    session: Session,
    /// Theme last pushed to the egui context
    applied_theme: Option<Theme>,
}

impl InterestApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let session = Session::new(Theme::from_dark_mode(config.dark_mode));
        Self {
            config,
            session,
            applied_theme: None,
        }
    }

    fn apply_theme(&mut self, ctx: &egui::Context) {
        let theme = self.session.theme();
        if self.applied_theme != Some(theme) {
            ctx.set_visuals(theme.visuals());
            self.applied_theme = Some(theme);
            log::debug!("Applied {:?} theme", theme);
        }
    }

    fn handle_action(&mut self, action: ControlPanelAction) {
        match action {
            ControlPanelAction::Calculate => self.handle_calculate(),
            ControlPanelAction::Clear => self.handle_clear(),
            ControlPanelAction::SaveData => self.handle_save_data(),
            ControlPanelAction::ToggleTheme => {
                let theme = self.session.toggle_theme();
                log::debug!("Dark mode {}", if theme.is_dark() { "on" } else { "off" });
            }
            ControlPanelAction::None => {}
        }
    }

    fn handle_calculate(&mut self) {
        match self.session.calculate() {
            Ok(count) => log::info!("Calculated {} yearly totals", count),
            Err(e) => {
                log::warn!("Rejected input for {}: {:?}", e.field(), e.raw());
                show_warning(&e.to_string());
            }
        }
    }

    fn handle_clear(&mut self) {
        self.session.reset();
        log::debug!("Session reset");
    }

    /// Ask for a directory and export the table and chart into it.
    fn handle_save_data(&mut self) {
        let dir = FileDialog::new().set_title("Select Directory").pick_folder();

        match self.session.export(dir.as_deref(), &self.config.export) {
            Ok(report) => {
                log::info!(
                    "Exported {} and {}",
                    report.csv_path.display(),
                    report.chart_path.display()
                );
                show_info("Saved", &report.summary());
            }
            Err(e) => {
                log::warn!("Export failed: {}", e);
                show_warning(&e.to_string());
            }
        }
    }
}

fn show_warning(message: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title("Error")
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}

fn show_info(title: &str, message: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}

impl eframe::App for InterestApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme(ctx);

        let mut action = ControlPanelAction::None;
        let theme = self.session.theme();

        // Top row - inputs and dark mode toggle
        TopBottomPanel::top("inputs").show(ctx, |ui| {
            ui.add_space(8.0);
            action = ControlPanel::show_inputs(ui, &mut self.session.inputs, theme);
            ui.add_space(8.0);
        });

        // Left column - results table and buttons
        SidePanel::left("results")
            .resizable(false)
            .exact_width(RESULTS_PANEL_WIDTH)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                let table_height = (ui.available_height() - BUTTONS_HEIGHT).max(100.0);
                ResultsTable::show(ui, self.session.rows(), table_height);
                ui.add_space(10.0);

                let clicked = ControlPanel::show_buttons(ui);
                if clicked != ControlPanelAction::None {
                    action = clicked;
                }
            });

        // Right area - chart
        CentralPanel::default().show(ctx, |ui| {
            ChartViewer::show(ui, self.session.chart());
        });

        if action != ControlPanelAction::None {
            self.handle_action(action);
            ctx.request_repaint();
        }
    }
}
