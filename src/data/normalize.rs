//! Flattening a range-query response into rows.
//!
//! Every `(timestamp, value)` sample of every series becomes one [`Row`].
//! Samples whose value does not coerce to a number are dropped: Prometheus
//! reports missing data as `"NaN"` and similar sentinels, and those points
//! carry nothing worth plotting or averaging. The drop is silent apart from a
//! debug trace.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::row::{from_epoch_seconds, Row};
use crate::source::{QueryResponse, Sample, Series};

/// Flatten a raw response body.
///
/// Returns `None` when the body does not have the
/// `{data: {result: [...]}}` shape.
pub fn normalize(body: &Value) -> Option<Vec<Row>> {
    match QueryResponse::deserialize(body) {
        Ok(response) => Some(rows_from_response(&response)),
        Err(e) => {
            debug!(error = %e, "response body is not a range-query result");
            None
        }
    }
}

/// Flatten an already typed response.
pub fn rows_from_response(response: &QueryResponse) -> Vec<Row> {
    let mut rows = Vec::new();
    let mut dropped = 0usize;

    for series in &response.data.result {
        for sample in &series.values {
            match sample_to_row(series, sample) {
                Some(row) => rows.push(row),
                None => dropped += 1,
            }
        }
    }

    if dropped > 0 {
        debug!(dropped, kept = rows.len(), "dropped samples without a numeric value");
    }

    rows
}

fn sample_to_row(series: &Series, sample: &Sample) -> Option<Row> {
    let value = sample.value().to_f64().filter(|v| !v.is_nan())?;
    let timestamp = from_epoch_seconds(sample.timestamp().to_f64()?)?;
    Some(Row::new(timestamp, series.instance(), value))
}
