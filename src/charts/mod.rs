//! Charts module - Chart drawing and rendering

mod plotter;
mod renderer;

pub use plotter::ChartPlotter;
pub use renderer::{RenderError, StaticChartRenderer};

/// Title shown above the chart on screen and in the exported image.
pub const CHART_TITLE: &str = "Interest Chart";
