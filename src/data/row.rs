//! Flat row records and their timestamp encoding.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// One sample of one instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    #[serde(with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
    pub instance: String,
    pub value: f64,
}

impl Row {
    pub fn new(timestamp: NaiveDateTime, instance: impl Into<String>, value: f64) -> Self {
        Self {
            timestamp,
            instance: instance.into(),
            value,
        }
    }

    /// The grouping key: rows sharing it describe the same point.
    pub fn key(&self) -> (NaiveDateTime, &str) {
        (self.timestamp, self.instance.as_str())
    }
}

/// Convert Unix epoch seconds (possibly fractional) to a UTC calendar time,
/// kept to microsecond precision.
///
/// Returns `None` for non-finite or out-of-range input.
pub fn from_epoch_seconds(secs: f64) -> Option<NaiveDateTime> {
    if !secs.is_finite() {
        return None;
    }

    let whole = secs.floor();
    let mut micros = ((secs - whole) * 1e6).round() as u32;
    let mut whole = whole;
    if micros >= 1_000_000 {
        whole += 1.0;
        micros = 0;
    }
    if whole < i64::MIN as f64 || whole > i64::MAX as f64 {
        return None;
    }

    DateTime::<Utc>::from_timestamp(whole as i64, micros * 1_000).map(|dt| dt.naive_utc())
}

/// `2024-01-02 03:04:05`, with a fractional part only when non-zero.
pub mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";
    const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn format(ts: &NaiveDateTime) -> String {
        ts.format(FORMAT).to_string()
    }

    pub fn parse(s: &str) -> Option<NaiveDateTime> {
        let s = s.trim();
        NaiveDateTime::parse_from_str(s, FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(s, ISO_FORMAT))
            .ok()
    }

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(ts))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_epoch_seconds() {
        let ts = from_epoch_seconds(1000.0).unwrap();
        assert_eq!(timestamp_format::format(&ts), "1970-01-01 00:16:40");

        let ts = from_epoch_seconds(1000.5).unwrap();
        assert_eq!(timestamp_format::format(&ts), "1970-01-01 00:16:40.500");
    }

    #[test]
    fn test_from_epoch_seconds_rejects_non_finite() {
        assert!(from_epoch_seconds(f64::NAN).is_none());
        assert!(from_epoch_seconds(f64::INFINITY).is_none());
        assert!(from_epoch_seconds(1e30).is_none());
    }

    #[test]
    fn test_parse_formats() {
        let expected = from_epoch_seconds(1_700_000_000.0).unwrap();
        assert_eq!(timestamp_format::parse("2023-11-14 22:13:20"), Some(expected));
        assert_eq!(timestamp_format::parse("2023-11-14T22:13:20"), Some(expected));
        assert_eq!(timestamp_format::parse("yesterday"), None);
    }
}
