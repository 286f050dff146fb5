//! Output key value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Key used when none is configured
pub const DEFAULT_OUTPUT_KEY: &str = "fact";

/// Name on the left-hand side of a `key=value` output line (Value Object)
///
/// Never empty and never contains `=`, CR or LF.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OutputKey(String);

impl OutputKey {
    pub fn new(key: impl Into<String>) -> Result<Self, DomainError> {
        let key = key.into();
        if key.is_empty() {
            return Err(DomainError::EmptyOutputKey);
        }
        if key.contains(['=', '\r', '\n']) {
            return Err(DomainError::InvalidOutputKey(key));
        }
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for OutputKey {
    fn default() -> Self {
        Self(DEFAULT_OUTPUT_KEY.to_string())
    }
}

impl std::fmt::Display for OutputKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for OutputKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for OutputKey {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OutputKey> for String {
    fn from(key: OutputKey) -> Self {
        key.0
    }
}
