//! Append-only writer for the runner's step output file.

use catfact_application::{StepOutputError, StepOutputSink};
use catfact_domain::StepOutput;
use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable the runner uses to pass the output file path
pub const GITHUB_OUTPUT_VAR: &str = "GITHUB_OUTPUT";

/// [`StepOutputSink`] writing to a file on disk.
///
/// The file is opened, appended to and closed on every [`append`](Self::append)
/// call. It is created if it does not exist yet; existing content is kept.
#[derive(Debug, Clone)]
pub struct GithubOutputFile {
    path: PathBuf,
}

impl GithubOutputFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the output path from the environment variable `var`.
    pub fn from_env(var: &str) -> Result<Self, StepOutputError> {
        Self::from_env_value(var, std::env::var_os(var))
    }

    /// Resolve from an already-read variable value.
    ///
    /// An empty value counts as unset.
    pub fn from_env_value(var: &str, value: Option<OsString>) -> Result<Self, StepOutputError> {
        match value {
            Some(path) if !path.is_empty() => Ok(Self::new(path)),
            _ => Err(StepOutputError::Unset(var.to_string())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, source: std::io::Error) -> StepOutputError {
        StepOutputError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl StepOutputSink for GithubOutputFile {
    fn append(&self, output: &StepOutput) -> Result<(), StepOutputError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.write_error(e))?;

        file.write_all(output.to_line().as_bytes())
            .map_err(|e| self.write_error(e))?;
        file.flush().map_err(|e| self.write_error(e))?;

        debug!("Appended '{}' to {}", output.key(), self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
