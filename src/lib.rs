//! # promplot
//!
//! Fetch a Prometheus range query, save it as CSV and plot it as SVG.
//!
//! ## Architecture
//!
//! One run is a straight pipeline; nothing calls back into an earlier stage:
//!
//! ```text
//! ┌──────────┐   JSON    ┌──────────┐   CSV    ┌──────────┐
//! │  source  │──────────▶│   data   │─────────▶│  render  │──▶ SVG
//! │ (fetch)  │           │(normalize│          │ (plot)   │
//! └──────────┘           │aggregate)│          └──────────┘
//!                        └──────────┘
//! ```
//!
//! - **[`source`]**: [`PrometheusClient`] issues the range query and returns
//!   the JSON body, or `None` for a non-200 answer
//! - **[`data`]**: flattens series into [`Row`]s, drops samples without a
//!   numeric value, averages duplicate `(timestamp, instance)` rows and
//!   persists the table
//! - **[`render`]**: reloads the table and draws one line per instance
//! - **[`pipeline`]**: ties the three together and names the output files
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! promplot node_load1 "now - 24h" now 60s
//! promplot 'rate(http_requests_total[5m])' 1700000000 1700086400 5m
//! ```
//!
//! ### As a library
//!
//! ```no_run
//! use promplot::{Pipeline, RangeQuery, Settings};
//!
//! # fn main() -> Result<(), promplot::Error> {
//! let pipeline = Pipeline::new(Settings::default())?;
//! let outcome = pipeline.run(
//!     &RangeQuery::new("up", 1_700_000_000, 1_700_003_600, "60s"),
//!     chrono::Local::now().naive_local(),
//! )?;
//! println!("{:?}", outcome.svg);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod source;

pub use config::Settings;
pub use data::{aggregate, dedup, normalize, Row, TimeSpec};
pub use error::{Error, FetchError, Result};
pub use pipeline::{Outcome, Pipeline};
pub use render::{render_csv, ChartSettings};
pub use source::{PrometheusClient, QueryResponse, RangeQuery};
