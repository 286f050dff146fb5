//! Infrastructure layer for cat-facts
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod catfact;
pub mod config;
pub mod github;

// Re-export commonly used types
pub use catfact::{CatFactClient, DEFAULT_FACT_FIELD, DEFAULT_FACT_URL, DEFAULT_TIMEOUT_SECS};
pub use config::{
    ConfigLoader, ConfigValidationError, FileApiConfig, FileConfig, FileOutputConfig,
};
pub use github::{GITHUB_OUTPUT_VAR, GithubOutputFile};
