//! Step output line

use super::key::OutputKey;
use crate::core::fact::Fact;

/// One `key=value` entry destined for the runner's output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutput {
    key: OutputKey,
    value: String,
}

impl StepOutput {
    pub fn new(key: OutputKey, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }

    /// Output entry carrying a fact under the given key
    pub fn for_fact(key: OutputKey, fact: &Fact) -> Self {
        Self::new(key, fact.text())
    }

    pub fn key(&self) -> &OutputKey {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Render as `key=value\n`.
    ///
    /// Embedded newlines and `=` in the value are written as-is.
    pub fn to_line(&self) -> String {
        format!("{}={}\n", self.key, self.value)
    }
}
