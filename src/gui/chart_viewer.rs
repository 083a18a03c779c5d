//! Chart Viewer Widget
//! Right side area showing the interest chart, or a placeholder once cleared.

use crate::charts::{ChartPlotter, CHART_TITLE};
use crate::interest::GrowthSeries;
use egui::RichText;

pub struct ChartViewer;

impl ChartViewer {
    pub fn show(ui: &mut egui::Ui, chart: Option<&GrowthSeries>) {
        let Some(series) = chart else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        ui.vertical_centered(|ui| {
            ui.label(RichText::new(CHART_TITLE).size(18.0).strong());
        });
        ui.add_space(6.0);

        ChartPlotter::draw_growth_chart(ui, series);
    }
}
