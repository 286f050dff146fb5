//! API configuration from TOML (`[api]` section)

use crate::catfact::{DEFAULT_FACT_FIELD, DEFAULT_FACT_URL, DEFAULT_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw API configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Endpoint returning one fact per GET
    #[serde(deserialize_with = "super::scalar_string")]
    pub url: String,
    /// JSON field holding the fact text
    #[serde(deserialize_with = "super::scalar_string")]
    pub field: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// Upper bound on fact length, sent as `?max_length=`
    pub max_length: Option<u32>,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FACT_URL.to_string(),
            field: DEFAULT_FACT_FIELD.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            max_length: None,
        }
    }
}

impl FileApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
