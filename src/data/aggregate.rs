//! Collapsing duplicate `(timestamp, instance)` rows.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDateTime;

use super::row::Row;

/// Group rows by `(timestamp, instance)` and average each group.
///
/// The output has one row per key, ordered by timestamp then instance.
pub fn aggregate(rows: Vec<Row>) -> Vec<Row> {
    let mut groups: BTreeMap<(NaiveDateTime, String), (f64, usize)> = BTreeMap::new();

    for row in rows {
        let entry = groups.entry((row.timestamp, row.instance)).or_insert((0.0, 0));
        entry.0 += row.value;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|((timestamp, instance), (sum, count))| Row {
            timestamp,
            instance,
            value: sum / count as f64,
        })
        .collect()
}

/// Drop every row whose key was already seen, keeping the first occurrence
/// and the input order.
pub fn dedup(rows: Vec<Row>) -> Vec<Row> {
    let mut seen: HashSet<(NaiveDateTime, String)> = HashSet::with_capacity(rows.len());
    rows.into_iter()
        .filter(|row| seen.insert((row.timestamp, row.instance.clone())))
        .collect()
}
