//! Parsing of CLI time arguments and relative durations.

use std::time::Duration;

use crate::error::{Error, Result};

/// Suffix to seconds multiplier
const UNITS: &[(&str, u64)] = &[
    ("s", 1),
    ("m", 60),
    ("h", 3_600),
    ("d", 86_400),
    ("w", 604_800),
];

/// A point in time as given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSpec {
    /// The literal `now`.
    Now,
    /// `now - <duration>`, e.g. `now - 24h`.
    Ago(Duration),
    /// An absolute Unix timestamp in seconds.
    At(i64),
}

impl TimeSpec {
    /// Parse `now`, `now - 24h` (spaces optional, case-insensitive) or an
    /// integer Unix timestamp.
    pub fn parse(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();

        if normalized == "now" {
            return Ok(TimeSpec::Now);
        }

        if let Some(rest) = normalized.strip_prefix("now") {
            if let Some(offset) = rest.trim_start().strip_prefix('-') {
                return Ok(TimeSpec::Ago(parse_duration(offset)?));
            }
        }

        normalized.parse::<i64>().map(TimeSpec::At).map_err(|_| {
            Error::Time(format!(
                "expected a Unix timestamp, 'now' or 'now - <duration>', got '{}'",
                s
            ))
        })
    }

    /// Resolve to Unix seconds relative to `now`.
    pub fn resolve(&self, now: i64) -> i64 {
        match self {
            TimeSpec::Now => now,
            TimeSpec::Ago(d) => {
                now.saturating_sub(i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
            }
            TimeSpec::At(ts) => *ts,
        }
    }
}

/// Parse duration strings like "24h", "90m", "60s", "7d".
pub fn parse_duration(s: &str) -> Result<Duration> {
    let s = s.trim();

    for (suffix, multiplier) in UNITS {
        if let Some(val_str) = s.strip_suffix(suffix) {
            let val: u64 = val_str
                .trim()
                .parse()
                .map_err(|_| Error::Time(format!("invalid duration: {}", s)))?;
            let secs = val
                .checked_mul(*multiplier)
                .ok_or_else(|| Error::Time(format!("duration out of range: {}", s)))?;
            return Ok(Duration::from_secs(secs));
        }
    }

    Err(Error::Time(format!("Unknown duration format: {}", s)))
}

/// Format a duration using the largest unit that divides it evenly.
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs == 0 {
        return "0s".to_string();
    }
    UNITS
        .iter()
        .rev()
        .find(|(_, mult)| secs % mult == 0)
        .map(|(suffix, mult)| format!("{}{}", secs / mult, suffix))
        .unwrap_or_else(|| format!("{}s", secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_now() {
        assert_eq!(TimeSpec::parse("now").unwrap(), TimeSpec::Now);
        assert_eq!(TimeSpec::parse("NOW").unwrap(), TimeSpec::Now);
    }

    #[test]
    fn test_parse_now_minus_24h() {
        let spec = TimeSpec::parse("now - 24h").unwrap();
        assert_eq!(spec, TimeSpec::Ago(Duration::from_secs(86_400)));
        assert_eq!(spec.resolve(100_000), 100_000 - 86_400);

        assert_eq!(TimeSpec::parse("Now-24h").unwrap(), spec);
    }

    #[test]
    fn test_parse_timestamp() {
        let spec = TimeSpec::parse("1700000000").unwrap();
        assert_eq!(spec, TimeSpec::At(1_700_000_000));
        assert_eq!(spec.resolve(5), 1_700_000_000);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(TimeSpec::parse("yesterday").is_err());
        assert!(TimeSpec::parse("1700000000.5").is_err());
        assert!(TimeSpec::parse("now - soon").is_err());
    }

    #[test]
    fn test_parse_duration_units() {
        assert_eq!(parse_duration("60s").unwrap(), Duration::from_secs(60));
        assert_eq!(parse_duration("90m").unwrap(), Duration::from_secs(5_400));
        assert_eq!(parse_duration("7d").unwrap(), Duration::from_secs(604_800));
        assert!(parse_duration("5y").is_err());
    }

    #[test]
    fn test_parse_duration_overflow() {
        assert!(parse_duration("40000000000000w").is_err());
        assert!(TimeSpec::parse("now - 40000000000000w").is_err());
    }

    #[test]
    fn test_resolve_saturates() {
        let spec = TimeSpec::Ago(Duration::from_secs(u64::MAX));
        assert_eq!(spec.resolve(0), i64::MIN + 1);
        assert_eq!(spec.resolve(i64::MIN), i64::MIN);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(86_400)), "1d");
        assert_eq!(format_duration(Duration::from_secs(90)), "90s");
        assert_eq!(format_duration(Duration::from_secs(7_200)), "2h");
        assert_eq!(format_duration(Duration::ZERO), "0s");
    }
}
