//! Application Configuration
//! Startup settings with built-in defaults and an optional JSON override.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Environment variable naming an optional JSON configuration file.
pub const CONFIG_ENV: &str = "INTEREST_APP_CONFIG";

/// Export file layout and chart raster size.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Subdirectory created inside the chosen directory
    pub subdir: String,
    pub csv_file: String,
    pub chart_file: String,
    pub chart_width: u32,
    pub chart_height: u32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            subdir: "Saved".to_string(),
            csv_file: "result.csv".to_string(),
            chart_file: "Chart.png".to_string(),
            chart_width: 640,
            chart_height: 480,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_size: [f32; 2],
    /// Initial state of the dark mode checkbox
    pub dark_mode: bool,
    pub export: ExportConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_size: [850.0, 650.0],
            dark_mode: true,
            export: ExportConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parse a configuration from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid configuration JSON")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_json(&json)
    }

    /// Load from the file named by `INTEREST_APP_CONFIG`, or fall back to defaults.
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV) else {
            return Self::default();
        };

        match Self::from_file(Path::new(&path)) {
            Ok(config) => {
                log::info!("Loaded configuration from {}", Path::new(&path).display());
                config
            }
            Err(e) => {
                log::warn!("{:#}; using default configuration", e);
                Self::default()
            }
        }
    }
}
