//! CSV persistence of the aggregated table.

use std::path::Path;

use serde_json::Value;
use tracing::{info, warn};

use super::aggregate::aggregate;
use super::normalize::normalize;
use super::row::Row;
use crate::error::Result;

/// Header of the persisted table.
pub const COLUMNS: [&str; 3] = ["timestamp", "instance", "value"];

/// Write rows with a `timestamp,instance,value` header.
///
/// The header is written even when there are no rows.
pub fn write_csv(path: &Path, rows: &[Row]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Load rows written by [`write_csv`].
pub fn read_csv(path: &Path) -> Result<Vec<Row>> {
    let mut reader = csv::Reader::from_path(path)?;
    let rows = reader.deserialize().collect::<std::result::Result<Vec<Row>, _>>()?;
    Ok(rows)
}

/// Normalize, aggregate and save a fetched body.
///
/// An absent or malformed body is reported and nothing is written
/// (`Ok(None)`). Otherwise returns the number of rows saved.
pub fn save_response(body: Option<&Value>, path: &Path) -> Result<Option<usize>> {
    let Some(rows) = body.and_then(normalize) else {
        warn!("No data to save.");
        return Ok(None);
    };

    let rows = aggregate(rows);
    write_csv(path, &rows)?;
    info!("Data saved to {}", path.display());

    Ok(Some(rows.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::aggregate::dedup;
    use crate::data::row::from_epoch_seconds;
    use serde_json::json;
    use tempfile::TempDir;

    fn row(secs: f64, instance: &str, value: f64) -> Row {
        Row::new(from_epoch_seconds(secs).unwrap(), instance, value)
    }

    #[test]
    fn test_write_csv_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("up.csv");

        write_csv(&path, &[row(1000.0, "a", 6.0), row(1060.5, "b:9100", 0.25)]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "timestamp,instance,value");
        assert_eq!(lines[1], "1970-01-01 00:16:40,a,6.0");
        assert_eq!(lines[2], "1970-01-01 00:17:40.500,b:9100,0.25");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_write_csv_empty_has_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.csv");

        write_csv(&path, &[]).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap().trim_end(), "timestamp,instance,value");
        assert!(read_csv(&path).unwrap().is_empty());
    }

    #[test]
    fn test_save_then_reload_matches_aggregate() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("load.csv");

        let body = json!({
            "data": { "result": [
                { "metric": { "instance": "a" }, "values": [["1000", "5"], ["1000", "7"], ["1060", "3"]] },
                { "metric": { "instance": "" }, "values": [[1000.5, "1.125"], [1060, "NaN"]] },
                { "metric": { "instance": "a" }, "values": [[1060, "5"]] }
            ]}
        });

        let saved = save_response(Some(&body), &path).unwrap();
        assert_eq!(saved, Some(3));

        let expected = aggregate(normalize(&body).unwrap());
        let reloaded = dedup(read_csv(&path).unwrap());
        assert_eq!(reloaded, expected);
        assert_eq!(
            reloaded,
            vec![row(1000.0, "a", 6.0), row(1000.5, "", 1.125), row(1060.0, "a", 4.0)]
        );
    }

    #[test]
    fn test_save_response_absent_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("none.csv");

        assert_eq!(save_response(None, &path).unwrap(), None);
        assert!(!path.exists());
    }

    #[test]
    fn test_save_response_malformed_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.csv");

        let body = json!({ "status": "error", "errorType": "bad_data" });
        assert_eq!(save_response(Some(&body), &path).unwrap(), None);
        assert!(!path.exists());
    }

    #[test]
    fn test_read_csv_missing_file() {
        assert!(read_csv(Path::new("/nonexistent/path/table.csv")).is_err());
    }
}
