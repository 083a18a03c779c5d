//! Export Writer Module
//! Writes the results table as CSV and the chart as PNG into `<dir>/Saved/`.
//!
//! Files are written in place: the CSV first, then the chart. A failure while
//! writing the chart leaves the CSV behind.

use crate::charts::{RenderError, StaticChartRenderer};
use crate::config::ExportConfig;
use crate::interest::{GrowthSeries, YearRow};
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("No directory selected.")]
    NoDirectorySelected,
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("Failed to save chart image: {0}")]
    Image(#[from] image::ImageError),
}

/// Paths of the files written by a successful export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportReport {
    pub csv_path: PathBuf,
    pub chart_path: PathBuf,
}

impl ExportReport {
    /// Message shown to the user after saving.
    pub fn summary(&self) -> String {
        format!(
            "Data saved to {} and {}",
            self.csv_path.display(),
            self.chart_path.display()
        )
    }
}

/// One CSV record: year as integer text, total with two decimals.
#[derive(Serialize)]
struct CsvRecord {
    #[serde(rename = "Year")]
    year: u32,
    #[serde(rename = "Total")]
    total: String,
}

/// Write the `Year,Total` header followed by one line per row.
pub fn write_results_csv<W: Write>(writer: W, rows: &[YearRow]) -> Result<(), ExportError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(["Year", "Total"])?;
    for row in rows {
        wtr.serialize(CsvRecord {
            year: row.year,
            total: row.formatted_total(),
        })?;
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Export results and chart into `<dir>/<subdir>/`.
///
/// `dir` is `None` when the user dismissed the directory picker. Nothing
/// requires a prior calculation: empty rows give a header-only CSV and a
/// cleared chart gives a blank image.
pub fn export_results(
    dir: Option<&Path>,
    rows: &[YearRow],
    chart: Option<&GrowthSeries>,
    config: &ExportConfig,
) -> Result<ExportReport, ExportError> {
    let dir = dir.ok_or(ExportError::NoDirectorySelected)?;

    let folder = dir.join(&config.subdir);
    fs::create_dir_all(&folder).map_err(|source| ExportError::Io {
        path: folder.clone(),
        source,
    })?;

    let csv_path = folder.join(&config.csv_file);
    let file = File::create(&csv_path).map_err(|source| ExportError::Io {
        path: csv_path.clone(),
        source,
    })?;
    write_results_csv(file, rows)?;
    log::debug!("Wrote {} rows to {}", rows.len(), csv_path.display());

    let chart_path = folder.join(&config.chart_file);
    let img = StaticChartRenderer::render(chart, config.chart_width, config.chart_height)?;
    img.save(&chart_path)?;
    log::debug!("Wrote chart image to {}", chart_path.display());

    Ok(ExportReport {
        csv_path,
        chart_path,
    })
}
