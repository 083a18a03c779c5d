//! Export module - CSV and chart image output

mod writer;

pub use writer::{export_results, ExportError, ExportReport};
