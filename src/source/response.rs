//! Typed view of a Prometheus range-query response body.
//!
//! ```json
//! {
//!   "status": "success",
//!   "data": {
//!     "resultType": "matrix",
//!     "result": [
//!       { "metric": { "instance": "node-1:9100" }, "values": [[1700000000, "0.25"]] }
//!     ]
//!   }
//! }
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

/// Label used to tell series apart.
pub const INSTANCE_LABEL: &str = "instance";

/// Top-level response body.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    pub data: QueryData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueryData {
    pub result: Vec<Series>,
}

/// One labeled series of samples.
#[derive(Debug, Clone, Deserialize)]
pub struct Series {
    #[serde(default)]
    pub metric: BTreeMap<String, String>,
    #[serde(default)]
    pub values: Vec<Sample>,
}

impl Series {
    /// The `instance` label, or an empty string when the series has none.
    pub fn instance(&self) -> &str {
        self.metric.get(INSTANCE_LABEL).map(String::as_str).unwrap_or("")
    }
}

/// A `[timestamp, value]` pair.
///
/// Prometheus encodes timestamps as JSON numbers and values as strings, but
/// either side may show up as the other.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sample(pub Scalar, pub Scalar);

impl Sample {
    pub fn timestamp(&self) -> &Scalar {
        &self.0
    }

    pub fn value(&self) -> &Scalar {
        &self.1
    }
}

/// A raw scalar as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
    /// `null`, booleans and anything else that cannot be a number.
    Other(serde_json::Value),
}

impl Scalar {
    /// Numeric coercion: numbers pass through, strings are trimmed and
    /// parsed. Returns `None` for anything that is not a number.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            Scalar::Text(s) => s.trim().parse().ok(),
            Scalar::Other(_) => None,
        }
    }
}
