//! Fact query value object

use serde::{Deserialize, Serialize};

/// Optional constraints sent along with a fact request
///
/// The default query carries no parameters, so the request goes to the
/// endpoint exactly as configured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactQuery {
    /// Upper bound on the fact length, in characters
    pub max_length: Option<u32>,
}

impl FactQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }
}
