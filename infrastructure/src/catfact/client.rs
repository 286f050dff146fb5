//! HTTP client for the fact endpoint

use super::response::extract_fact;
use async_trait::async_trait;
use catfact_application::{FactSource, FactSourceError};
use catfact_domain::{Fact, FactQuery};
use reqwest::header::ACCEPT;
use std::time::Duration;
use tracing::debug;

/// Public endpoint returning one random fact per GET
pub const DEFAULT_FACT_URL: &str = "https://catfact.ninja/fact";

/// JSON field holding the fact text
pub const DEFAULT_FACT_FIELD: &str = "fact";

/// Request timeout when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const USER_AGENT: &str = concat!("cat-facts/", env!("CARGO_PKG_VERSION"));

/// [`FactSource`] backed by a single GET request
///
/// Holds a [`reqwest::Client`] built with the request timeout. No retries.
#[derive(Debug, Clone)]
pub struct CatFactClient {
    http_client: reqwest::Client,
    url: String,
    field: String,
    timeout: Duration,
}

impl CatFactClient {
    /// Create a client for `url` with the given request timeout.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FactSourceError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                FactSourceError::Connection(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            http_client,
            url: url.into(),
            field: DEFAULT_FACT_FIELD.to_string(),
            timeout,
        })
    }

    /// Read the fact from a different JSON field
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    fn transport_error(&self, error: reqwest::Error) -> FactSourceError {
        if error.is_timeout() {
            FactSourceError::Timeout(self.timeout.as_secs())
        } else {
            FactSourceError::Connection(error.to_string())
        }
    }
}

#[async_trait]
impl FactSource for CatFactClient {
    async fn fetch(&self, query: &FactQuery) -> Result<Fact, FactSourceError> {
        let mut request = self
            .http_client
            .get(&self.url)
            .header(ACCEPT, "application/json");

        if let Some(max_length) = query.max_length {
            request = request.query(&[("max_length", max_length)]);
        }

        let response = request.send().await.map_err(|e| self.transport_error(e))?;

        let status = response.status();
        debug!("GET {} -> {}", self.url, status.as_u16());
        if !status.is_success() {
            return Err(FactSourceError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        extract_fact(&body, &self.field)
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}
