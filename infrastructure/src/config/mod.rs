//! Configuration file loading for cat-facts
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `CAT_FACTS_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./cat-facts.toml` or `./.cat-facts.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/cat-facts/config.toml`
//! 5. Default values
//!
//! Command-line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{ConfigValidationError, FileApiConfig, FileConfig, FileOutputConfig};
pub use loader::ConfigLoader;
