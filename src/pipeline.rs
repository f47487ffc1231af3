//! The fetch → save → plot run.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDateTime;
use tracing::{info, warn};

use crate::config::Settings;
use crate::data::save_response;
use crate::data::time::format_duration;
use crate::error::Result;
use crate::render::render_csv;
use crate::source::{PrometheusClient, RangeQuery};

/// Format of the timestamp suffix in output file names.
pub const FILE_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Files produced by one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// The saved table, if the backend returned data.
    pub csv: Option<PathBuf>,
    /// The rendered chart, if a table was saved.
    pub svg: Option<PathBuf>,
    /// Rows in the saved table.
    pub rows: usize,
}

/// `<query>_<stamp>` with spaces and path separators replaced by `_`.
pub fn output_stem(query: &str, started: NaiveDateTime) -> String {
    let name: String = query
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            c => c,
        })
        .collect();
    format!("{}_{}", name, started.format(FILE_STAMP_FORMAT))
}

#[derive(Debug)]
pub struct Pipeline {
    client: PrometheusClient,
    settings: Settings,
}

impl Pipeline {
    pub fn new(settings: Settings) -> Result<Self> {
        let client = PrometheusClient::builder()
            .endpoint(settings.endpoint.clone())
            .build()?;
        Ok(Self { client, settings })
    }

    /// Use an already configured client.
    pub fn with_client(client: PrometheusClient, settings: Settings) -> Self {
        Self { client, settings }
    }

    /// Output paths for `query` in the configured directory.
    pub fn output_paths(&self, query: &str, started: NaiveDateTime) -> (PathBuf, PathBuf) {
        let stem = output_stem(query, started);
        let dir: &Path = &self.settings.output_dir;
        (dir.join(format!("{}.csv", stem)), dir.join(format!("{}.svg", stem)))
    }

    /// Fetch `query`, save the aggregated table and plot it.
    ///
    /// A non-200 response or a malformed body leaves nothing on disk and is
    /// not an error.
    pub fn run(&self, query: &RangeQuery, started: NaiveDateTime) -> Result<Outcome> {
        let (csv_path, svg_path) = self.output_paths(&query.query, started);

        let window = Duration::from_secs(query.end.saturating_sub(query.start).max(0) as u64);
        info!(
            "Querying {} over {} at step {}",
            query.query,
            format_duration(window),
            query.step
        );

        let body = self.client.fetch(query)?;
        let Some(rows) = save_response(body.as_ref(), &csv_path)? else {
            warn!("Nothing to plot for {}", query.query);
            return Ok(Outcome::default());
        };

        render_csv(&csv_path, &query.query, &svg_path, &self.settings.chart())?;

        Ok(Outcome {
            csv: Some(csv_path),
            svg: Some(svg_path),
            rows,
        })
    }
}
