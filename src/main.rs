//! My Interest Application - Compound Interest Calculator
//!
//! Computes year-by-year compound interest, shows the totals in a table and a
//! line chart, and exports both to disk as CSV and PNG.

mod charts;
mod config;
mod export;
mod gui;
mod interest;

use config::AppConfig;
use eframe::egui;
use gui::InterestApp;

const WINDOW_TITLE: &str = "My Interest Application";

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = AppConfig::load();
    log::info!("Starting {}", WINDOW_TITLE);

    // Fixed-size window
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_resizable(false)
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(InterestApp::new(cc, config)))),
    )
}
