//! Chart Plotter Module
//! Draws the interactive interest chart using egui_plot.

use crate::interest::GrowthSeries;
use egui::Color32;
use egui_plot::{Line, MarkerShape, Plot, PlotPoints, Points};

/// Series color (matches the exported chart)
pub const SERIES_COLOR: Color32 = Color32::from_rgb(31, 119, 180);

/// Draws the growth line chart with a marker at each year.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Label for an x-axis tick: whole years only.
    pub fn year_tick_label(value: f64) -> String {
        if value >= 0.0 && value.fract() == 0.0 {
            format!("{}", value as u64)
        } else {
            String::new()
        }
    }

    pub fn draw_growth_chart(ui: &mut egui::Ui, series: &GrowthSeries) {
        let points: Vec<[f64; 2]> = series
            .points
            .iter()
            .copied()
            .filter(|p| p[1].is_finite())
            .collect();

        Plot::new("interest_chart")
            .x_axis_label("Year")
            .y_axis_label("Total")
            .allow_scroll(false)
            .include_x(0.0)
            .x_axis_formatter(|mark, _range| Self::year_tick_label(mark.value))
            .label_formatter(|_name, value| {
                format!("Year {:.0}\nTotal {:.2}", value.x, value.y)
            })
            .show(ui, |plot_ui| {
                if points.is_empty() {
                    return;
                }

                plot_ui.line(
                    Line::new(PlotPoints::from_iter(points.iter().copied()))
                        .color(SERIES_COLOR)
                        .width(2.0)
                        .name("Total"),
                );

                plot_ui.points(
                    Points::new(PlotPoints::from_iter(points.iter().copied()))
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(4.0)
                        .color(SERIES_COLOR),
                );
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_ticks_are_whole_numbers() {
        assert_eq!(ChartPlotter::year_tick_label(3.0), "3");
        assert_eq!(ChartPlotter::year_tick_label(2.5), "");
        assert_eq!(ChartPlotter::year_tick_label(-1.0), "");
    }
}
