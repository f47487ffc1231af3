//! Fetching range-query results from a Prometheus-compatible backend.
//!
//! [`PrometheusClient`] issues the HTTP request and hands back the raw JSON
//! body; [`QueryResponse`] is the typed shape the normalizer reads it into.

mod client;
mod response;

#[cfg(test)]
pub(crate) mod test_server;

pub use client::{PrometheusClient, PrometheusClientBuilder, RangeQuery, DEFAULT_ENDPOINT};
pub use response::{QueryData, QueryResponse, Sample, Scalar, Series, INSTANCE_LABEL};
