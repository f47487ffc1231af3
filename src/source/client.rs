//! Blocking client for the Prometheus range-query API.
//!
//! ## Example
//!
//! ```rust,no_run
//! use promplot::{PrometheusClient, RangeQuery};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PrometheusClient::builder()
//!     .endpoint("http://localhost:9090/api/v1/query_range")
//!     .build()?;
//!
//! let query = RangeQuery::new("up", 1_700_000_000, 1_700_003_600, "60s");
//! if let Some(body) = client.fetch(&query)? {
//!     println!("{}", body);
//! }
//! # Ok(())
//! # }
//! ```

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::FetchError;

/// Range-query endpoint of a local Prometheus server.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:9090/api/v1/query_range";

/// Parameters of a single range query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeQuery {
    pub query: String,
    /// Unix seconds.
    pub start: i64,
    /// Unix seconds.
    pub end: i64,
    /// Resolution step, passed through verbatim (e.g. "60s").
    pub step: String,
}

impl RangeQuery {
    pub fn new(query: impl Into<String>, start: i64, end: i64, step: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            start,
            end,
            step: step.into(),
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("query", self.query.clone()),
            ("start", self.start.to_string()),
            ("end", self.end.to_string()),
            ("step", self.step.clone()),
        ]
    }
}

/// Client issuing range queries against one endpoint.
#[derive(Debug, Clone)]
pub struct PrometheusClient {
    client: Client,
    endpoint: String,
}

impl PrometheusClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> PrometheusClientBuilder {
        PrometheusClientBuilder::default()
    }

    /// The endpoint requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issue one GET for `query`.
    ///
    /// Returns `Ok(None)` when the server answers with anything other than
    /// 200: the caller gets "no data" rather than a failure. Transport
    /// failures and non-JSON bodies are errors.
    pub fn fetch(&self, query: &RangeQuery) -> Result<Option<Value>, FetchError> {
        debug!(
            endpoint = %self.endpoint,
            query = %query.query,
            start = query.start,
            end = query.end,
            step = %query.step,
            "fetching range query"
        );

        let response = self.client.get(&self.endpoint).query(&query.params()).send()?;

        if response.status() != StatusCode::OK {
            warn!("Error fetching data: {}", response.status().as_u16());
            return Ok(None);
        }

        let body: Value = response
            .json()
            .map_err(|e| FetchError::Parse(e.to_string()))?;

        Ok(Some(body))
    }
}

/// Builder for PrometheusClient.
#[derive(Debug, Default)]
pub struct PrometheusClientBuilder {
    endpoint: Option<String>,
    no_proxy: bool,
}

impl PrometheusClientBuilder {
    /// Set the range-query endpoint (default: local Prometheus on port 9090).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Ignore `HTTP_PROXY`-style environment variables.
    pub fn no_proxy(mut self) -> Self {
        self.no_proxy = true;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<PrometheusClient, FetchError> {
        let mut builder = Client::builder();
        if self.no_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;

        Ok(PrometheusClient {
            client,
            endpoint: self
                .endpoint
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        })
    }
}
