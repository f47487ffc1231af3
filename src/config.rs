//! Layered settings: defaults, then an optional TOML file, then
//! `PROMPLOT_*` environment variables.
//!
//! ```toml
//! endpoint = "http://prometheus.internal:9090/api/v1/query_range"
//! output_dir = "reports"
//! width = 1200
//! height = 700
//! ```

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;
use crate::render::ChartSettings;
use crate::source::DEFAULT_ENDPOINT;

/// File picked up from the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "promplot.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    /// Range-query endpoint.
    pub endpoint: String,
    /// Directory the CSV and SVG files are written to.
    pub output_dir: PathBuf,
    /// Chart width in pixels.
    pub width: u32,
    /// Chart height in pixels.
    pub height: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            output_dir: PathBuf::from("."),
            width: ChartSettings::default().width,
            height: ChartSettings::default().height,
        }
    }
}

impl Settings {
    /// Load settings.
    ///
    /// An explicit `path` must exist; otherwise `promplot.toml` is used if
    /// present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = Settings::default();

        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config = Config::builder()
            .set_default("endpoint", defaults.endpoint)?
            .set_default("output_dir", defaults.output_dir.to_string_lossy().into_owned())?
            .set_default("width", defaults.width as i64)?
            .set_default("height", defaults.height as i64)?
            .add_source(file)
            .add_source(Environment::with_prefix("PROMPLOT"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn chart(&self) -> ChartSettings {
        ChartSettings {
            width: self.width,
            height: self.height,
        }
    }
}
