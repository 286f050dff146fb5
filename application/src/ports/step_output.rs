//! Step output sink port
//!
//! Defines where `key=value` step outputs end up. The CI runner reads
//! them back after the step finishes.

use catfact_domain::StepOutput;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while recording a step output
#[derive(Error, Debug)]
pub enum StepOutputError {
    #[error("Environment variable {0} is not set; cannot locate the step output file")]
    Unset(String),

    #[error("Failed to write step output to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Append-only destination for step outputs
pub trait StepOutputSink: Send + Sync {
    /// Append one output entry. Earlier entries are never touched.
    fn append(&self, output: &StepOutput) -> Result<(), StepOutputError>;

    /// Human-readable location, for logs
    fn location(&self) -> String;
}
