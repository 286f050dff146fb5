//! Fact source port
//!
//! Defines the interface for fetching a fact from an upstream API.

use async_trait::async_trait;
use catfact_domain::{Fact, FactQuery};
use thiserror::Error;

/// Errors that can occur while fetching a fact
#[derive(Error, Debug)]
pub enum FactSourceError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    #[error("HTTP error: {status} {reason}")]
    HttpStatus { status: u16, reason: String },

    #[error("Response body is not valid JSON: {0}")]
    InvalidBody(String),

    #[error("Response has no \"{0}\" field")]
    MissingField(String),

    #[error("Field \"{field}\" is not a string (found {found})")]
    InvalidField { field: String, found: String },
}

/// Source of facts
///
/// This port defines how the application layer obtains a fact.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait FactSource: Send + Sync {
    /// Fetch exactly one fact
    async fn fetch(&self, query: &FactQuery) -> Result<Fact, FactSourceError>;

    /// Endpoint the source talks to, for diagnostics
    fn endpoint(&self) -> &str;
}
