//! Output configuration from TOML (`[output]` section)

use crate::github::GITHUB_OUTPUT_VAR;
use catfact_domain::DEFAULT_OUTPUT_KEY;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Key written on the left of `=`
    #[serde(deserialize_with = "super::scalar_string")]
    pub key: String,
    /// Environment variable naming the output file
    #[serde(deserialize_with = "super::scalar_string")]
    pub env_var: String,
    /// Explicit output file; takes precedence over `env_var`
    pub path: Option<PathBuf>,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            key: DEFAULT_OUTPUT_KEY.to_string(),
            env_var: GITHUB_OUTPUT_VAR.to_string(),
            path: None,
        }
    }
}
