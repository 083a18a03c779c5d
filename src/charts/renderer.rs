//! Static Chart Renderer
//! Rasterizes the interest chart for export using plotters.
//!
//! Layout mirrors the on-screen chart:
//! 1. Title "Interest Chart" centered
//! 2. Mesh with "Year" on the x-axis and "Total" on the y-axis
//! 3. Line through the yearly totals with a circle marker at each point
//!
//! A cleared chart renders as a blank white canvas.

use crate::charts::CHART_TITLE;
use crate::interest::GrowthSeries;
use image::RgbImage;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use thiserror::Error;

const LINE_COLOR: RGBColor = RGBColor(31, 119, 180);
const MARKER_RADIUS: i32 = 4;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to draw chart: {0}")]
    Draw(String),
    #[error("Invalid chart size {width}x{height}")]
    Size { width: u32, height: u32 },
}

fn draw_err<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Draw(e.to_string())
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render the chart (or a blank canvas for `None`) into an RGB image.
    pub fn render(
        chart: Option<&GrowthSeries>,
        width: u32,
        height: u32,
    ) -> Result<RgbImage, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::Size { width, height });
        }

        let mut buf = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
            root.fill(&WHITE).map_err(draw_err)?;

            if let Some(series) = chart {
                Self::draw_series(&root, series)?;
            }

            root.present().map_err(draw_err)?;
        }

        RgbImage::from_raw(width, height, buf).ok_or(RenderError::Size { width, height })
    }

    fn draw_series(
        root: &DrawingArea<BitMapBackend<'_>, Shift>,
        series: &GrowthSeries,
    ) -> Result<(), RenderError> {
        let (x_range, y_range) = Self::axis_ranges(series);

        let mut chart = ChartBuilder::on(root)
            .caption(CHART_TITLE, ("sans-serif", 22))
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(80)
            .build_cartesian_2d(x_range, y_range)
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .x_desc("Year")
            .y_desc("Total")
            .x_labels(series.len().clamp(2, 10))
            .x_label_formatter(&|x: &f64| format!("{:.0}", x))
            .y_label_formatter(&|y: &f64| format!("{:.2}", y))
            .draw()
            .map_err(draw_err)?;

        let points: Vec<(f64, f64)> = series
            .points
            .iter()
            .filter(|p| p[1].is_finite())
            .map(|p| (p[0], p[1]))
            .collect();

        chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                LINE_COLOR.stroke_width(2),
            ))
            .map_err(draw_err)?;

        chart
            .draw_series(
                points
                    .iter()
                    .map(|&p| Circle::new(p, MARKER_RADIUS, LINE_COLOR.filled())),
            )
            .map_err(draw_err)?;

        Ok(())
    }

    /// Axis ranges with half a year of slack on x and 5% padding on y.
    pub fn axis_ranges(series: &GrowthSeries) -> (Range<f64>, Range<f64>) {
        let n = series.len() as f64;
        let x_range = if n > 0.0 { 0.5..n + 0.5 } else { 0.0..1.0 };

        let y_range = match series.total_range() {
            Some((lo, hi)) if hi > lo => {
                let pad = (hi - lo) * 0.05;
                (lo - pad)..(hi + pad)
            }
            Some((v, _)) => {
                let pad = v.abs().max(1.0) * 0.05;
                (v - pad)..(v + pad)
            }
            None => 0.0..1.0,
        };

        (x_range, y_range)
    }
}
