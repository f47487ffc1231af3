//! Axis ranges and tick labels.

use std::ops::Range;

use chrono::{DateTime, Utc};

/// Upper bound on the number of time ticks.
pub const MAX_X_TICKS: usize = 10;

/// Tick label format for the time axis.
pub const TICK_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Padding around a single-instant time range, in milliseconds.
const SINGLE_POINT_PAD_MS: i64 = 60_000;

/// Format a millisecond Unix timestamp as a tick label.
pub fn format_tick(ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .map(|dt| dt.naive_utc().format(TICK_FORMAT).to_string())
        .unwrap_or_default()
}

/// Range covering every timestamp, widened when degenerate.
pub fn time_range(times: impl IntoIterator<Item = i64>) -> Range<i64> {
    let (min, max) = times
        .into_iter()
        .fold((i64::MAX, i64::MIN), |(lo, hi), t| (lo.min(t), hi.max(t)));

    if min > max {
        0..SINGLE_POINT_PAD_MS
    } else if min == max {
        min - SINGLE_POINT_PAD_MS..max + SINGLE_POINT_PAD_MS
    } else {
        min..max
    }
}

/// Range covering every finite value with 5% headroom on both sides.
pub fn value_range(values: impl IntoIterator<Item = f64>) -> Range<f64> {
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if min > max {
        0.0..1.0
    } else if min == max {
        min - 1.0..max + 1.0
    } else {
        let pad = (max - min) * 0.05;
        min - pad..max + pad
    }
}
