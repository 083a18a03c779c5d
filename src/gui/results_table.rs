//! Results Table Widget
//! Two-column Year/Total table, one row per computed year.
//! Only the rows inside the visible scroll window are laid out.

use crate::interest::YearRow;
use egui::{Label, RichText, ScrollArea, TextStyle};
use std::ops::Range;

const COLUMN_WIDTH: f32 = 90.0;
const COLUMN_GAP: f32 = 12.0;

pub struct ResultsTable;

impl ResultsTable {
    /// Draw the table, filling at most `max_height`.
    ///
    /// Returns the range of rows that were laid out this frame.
    pub fn show(ui: &mut egui::Ui, rows: &[YearRow], max_height: f32) -> Range<usize> {
        egui::Frame::none()
            .fill(ui.visuals().extreme_bg_color)
            .rounding(4.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.set_height(max_height);

                let row_height = ui.text_style_height(&TextStyle::Body);

                Self::draw_row(
                    ui,
                    row_height,
                    RichText::new("Year").strong(),
                    RichText::new("Total").strong(),
                );
                ui.separator();

                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show_rows(ui, row_height, rows.len(), |ui, row_range| {
                        for row in &rows[row_range.clone()] {
                            Self::draw_row(
                                ui,
                                row_height,
                                RichText::new(row.year.to_string()),
                                RichText::new(row.formatted_total()),
                            );
                        }
                        row_range
                    })
                    .inner
            })
            .inner
    }

    fn draw_row(ui: &mut egui::Ui, row_height: f32, year: RichText, total: RichText) {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = COLUMN_GAP;
            ui.add_sized([COLUMN_WIDTH, row_height], Label::new(year));
            ui.add_sized([COLUMN_WIDTH, row_height], Label::new(total));
        });
    }
}
