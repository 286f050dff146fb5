//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into domain types after
//! validation.

mod api;
mod output;

pub use api::FileApiConfig;
pub use output::FileOutputConfig;

use catfact_domain::{DomainError, FactQuery, OutputKey};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Deserialize a string field from any scalar.
///
/// Environment overrides are parsed as typed values, so `CAT_FACTS_OUTPUT__KEY=42`
/// arrives as a number and `...=true` as a boolean.
pub(crate) fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        String(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
        Bool(bool),
        Char(char),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::String(s) => s,
        Scalar::Unsigned(n) => n.to_string(),
        Scalar::Signed(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Bool(b) => b.to_string(),
        Scalar::Char(c) => c.to_string(),
    })
}

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("api.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("api.url cannot be empty")]
    EmptyUrl,

    #[error("api.field cannot be empty")]
    EmptyField,

    #[error("api.max_length cannot be 0")]
    InvalidMaxLength,

    #[error("output.env_var cannot be empty")]
    EmptyEnvVar,

    #[error("output.key is invalid: {0}")]
    InvalidOutputKey(#[from] DomainError),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Upstream API settings
    pub api: FileApiConfig,
    /// Step output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, stopping at the first problem.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.api.url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyUrl);
        }
        if self.api.field.is_empty() {
            return Err(ConfigValidationError::EmptyField);
        }
        if self.api.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.api.max_length == Some(0) {
            return Err(ConfigValidationError::InvalidMaxLength);
        }
        if self.output.env_var.is_empty() && self.output.path.is_none() {
            return Err(ConfigValidationError::EmptyEnvVar);
        }
        self.output_key()?;
        Ok(())
    }

    /// Parsed `output.key`
    pub fn output_key(&self) -> Result<OutputKey, ConfigValidationError> {
        Ok(OutputKey::new(self.output.key.as_str())?)
    }

    /// Query parameters derived from `[api]`
    pub fn fact_query(&self) -> FactQuery {
        FactQuery {
            max_length: self.api.max_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.output_key().unwrap().as_str(), "fact");
        assert_eq!(config.fact_query(), FactQuery::new());
    }

    #[test]
    fn test_deserialize_full_toml() {
        let toml_str = r#"
[api]
url = "http://localhost:8080/fact"
field = "text"
timeout_seconds = 5
max_length = 140

[output]
key = "cat_fact"
env_var = "MY_OUTPUT"
path = "/tmp/out.txt"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.url, "http://localhost:8080/fact");
        assert_eq!(config.api.field, "text");
        assert_eq!(config.api.timeout_seconds, 5);
        assert_eq!(config.fact_query().max_length, Some(140));
        assert_eq!(config.output.key, "cat_fact");
        assert_eq!(config.output.env_var, "MY_OUTPUT");
        assert_eq!(
            config.output.path.as_deref(),
            Some(std::path::Path::new("/tmp/out.txt"))
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_scalar_fields_accept_numbers_and_booleans() {
        let toml_str = r#"
[api]
field = 7

[output]
key = 42
env_var = true
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.field, "7");
        assert_eq!(config.output.key, "42");
        assert_eq!(config.output.env_var, "true");
        assert_eq!(config.output_key().unwrap().as_str(), "42");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: FileConfig = toml::from_str("[api]\ntimeout_seconds = 3\n").unwrap();
        assert_eq!(config.api.timeout_seconds, 3);
        assert_eq!(config.api.url, "https://catfact.ninja/fact");
        assert_eq!(config.output, FileOutputConfig::default());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut config = FileConfig::default();
        config.api.timeout_seconds = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimeout)
        ));
    }

    #[test]
    fn test_validate_empty_url_and_field() {
        let mut config = FileConfig::default();
        config.api.url = "  ".to_string();
        assert!(matches!(config.validate(), Err(ConfigValidationError::EmptyUrl)));

        let mut config = FileConfig::default();
        config.api.field = String::new();
        assert!(matches!(config.validate(), Err(ConfigValidationError::EmptyField)));
    }

    #[test]
    fn test_validate_zero_max_length() {
        let mut config = FileConfig::default();
        config.api.max_length = Some(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidMaxLength)
        ));
    }

    #[test]
    fn test_validate_env_var_only_needed_without_path() {
        let mut config = FileConfig::default();
        config.output.env_var = String::new();
        assert!(matches!(config.validate(), Err(ConfigValidationError::EmptyEnvVar)));

        config.output.path = Some("/tmp/out".into());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bad_output_key() {
        let mut config = FileConfig::default();
        config.output.key = "fact=1".to_string();
        let error = config.validate().unwrap_err();
        assert!(matches!(error, ConfigValidationError::InvalidOutputKey(_)));
        assert!(error.to_string().starts_with("output.key is invalid"));
    }
}
