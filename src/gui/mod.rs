//! GUI module - User interface components

mod app;
mod chart_viewer;
mod control_panel;
mod results_table;
mod session;
mod theme;

pub use app::InterestApp;
pub use chart_viewer::ChartViewer;
pub use control_panel::{ControlPanel, ControlPanelAction};
pub use results_table::ResultsTable;
pub use session::{InputFields, Session};
pub use theme::Theme;
