//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Output key cannot be empty")]
    EmptyOutputKey,

    #[error("Output key {0:?} contains a forbidden character ('=', CR or LF)")]
    InvalidOutputKey(String),
}
