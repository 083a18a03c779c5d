//! Control Panel Widget
//! Input row (rate, initial investment, years, dark mode) and action buttons.

use crate::gui::{InputFields, Theme};
use egui::{RichText, TextEdit};

const FIELD_WIDTH: f32 = 110.0;
const BUTTON_HEIGHT: f32 = 30.0;

/// Input fields and buttons. Holds no state of its own; edits go straight
/// into the session's [`InputFields`].
pub struct ControlPanel;

impl ControlPanel {
    /// Draw the top input row.
    pub fn show_inputs(
        ui: &mut egui::Ui,
        inputs: &mut InputFields,
        theme: Theme,
    ) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.horizontal(|ui| {
            Self::labeled_field(ui, "Interest Rate (%):", &mut inputs.rate);
            Self::labeled_field(ui, "Initial Investment:", &mut inputs.initial);
            Self::labeled_field(ui, "Years to Invest:", &mut inputs.years);

            ui.add_space(8.0);
            let mut dark_mode = theme.is_dark();
            if ui.checkbox(&mut dark_mode, "Dark Mode").changed() {
                action = ControlPanelAction::ToggleTheme;
            }
        });

        action
    }

    fn labeled_field(ui: &mut egui::Ui, label: &str, text: &mut String) {
        ui.label(RichText::new(label).strong());
        ui.add(TextEdit::singleline(text).desired_width(FIELD_WIDTH));
        ui.add_space(6.0);
    }

    /// Draw the Calculate / Clear / Save Data buttons stacked vertically.
    pub fn show_buttons(ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;
        let width = ui.available_width();

        for (label, on_click) in [
            ("Calculate", ControlPanelAction::Calculate),
            ("Clear", ControlPanelAction::Clear),
            ("Save Data", ControlPanelAction::SaveData),
        ] {
            let button = egui::Button::new(RichText::new(label).size(14.0))
                .min_size(egui::vec2(width, BUTTON_HEIGHT));
            if ui.add(button).clicked() {
                action = on_click;
            }
            ui.add_space(4.0);
        }

        action
    }
}

/// Actions triggered by the control panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlPanelAction {
    None,
    Calculate,
    Clear,
    SaveData,
    ToggleTheme,
}
