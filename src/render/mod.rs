//! Rendering the saved table as a line chart.
//!
//! The renderer works from the CSV file rather than the in-memory rows so a
//! table saved earlier can be re-plotted on its own.

mod axis;
mod chart;

pub use axis::{format_tick, MAX_X_TICKS, TICK_FORMAT};
pub use chart::draw_chart;

use std::path::Path;

use tracing::info;

use crate::data::{dedup, read_csv, Row};
use crate::error::Result;

/// Output size of the chart in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSettings {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
        }
    }
}

/// The time-ordered points of one instance, as (Unix millis, value).
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceSeries {
    pub instance: String,
    pub points: Vec<(i64, f64)>,
}

impl InstanceSeries {
    pub fn legend_label(&self) -> String {
        if self.instance.is_empty() {
            "(no instance)".to_string()
        } else {
            self.instance.clone()
        }
    }
}

/// Split rows into one series per instance, in order of first appearance.
///
/// Points are sorted by time; non-finite values are left out.
pub fn group_by_instance(rows: &[Row]) -> Vec<InstanceSeries> {
    let mut series: Vec<InstanceSeries> = Vec::new();

    for row in rows {
        let idx = match series.iter().position(|s| s.instance == row.instance) {
            Some(idx) => idx,
            None => {
                series.push(InstanceSeries {
                    instance: row.instance.clone(),
                    points: Vec::new(),
                });
                series.len() - 1
            }
        };
        if row.value.is_finite() {
            series[idx]
                .points
                .push((row.timestamp.and_utc().timestamp_millis(), row.value));
        }
    }

    for s in &mut series {
        s.points.sort_by_key(|p| p.0);
    }
    series
}

/// Human-readable form of a query for titles and axis labels.
pub fn display_name(query: &str) -> String {
    query.replace('_', " ")
}

/// Reload `csv_path`, drop duplicate keys and plot one line per instance
/// into `output`.
pub fn render_csv(csv_path: &Path, query: &str, output: &Path, settings: &ChartSettings) -> Result<()> {
    let rows = dedup(read_csv(csv_path)?);
    let series = group_by_instance(&rows);

    let name = display_name(query);
    draw_chart(output, &series, &format!("{} Over Time", name), &name, settings)?;

    info!("Graph saved to {}", output.display());
    Ok(())
}
