//! Emit Fact use case
//!
//! Fetches one fact, prints it, and records it as a step output.

use crate::ports::fact_printer::FactPrinter;
use crate::ports::fact_source::{FactSource, FactSourceError};
use crate::ports::step_output::{StepOutputError, StepOutputSink};
use catfact_domain::{Fact, FactQuery, OutputKey, StepOutput};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while emitting a fact
#[derive(Error, Debug)]
pub enum EmitFactError {
    #[error("Failed to fetch fact: {0}")]
    Fetch(#[from] FactSourceError),

    #[error("Failed to print fact: {0}")]
    Print(#[source] std::io::Error),

    #[error(transparent)]
    Output(#[from] StepOutputError),
}

/// Input for the EmitFact use case
#[derive(Debug, Clone, Default)]
pub struct EmitFactInput {
    /// Constraints sent with the request
    pub query: FactQuery,
    /// Key the fact is recorded under
    pub output_key: OutputKey,
}

impl EmitFactInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: FactQuery) -> Self {
        self.query = query;
        self
    }

    pub fn with_output_key(mut self, key: OutputKey) -> Self {
        self.output_key = key;
        self
    }
}

/// Use case for the fetch, print, append sequence
pub struct EmitFactUseCase<S: FactSource + 'static> {
    source: Arc<S>,
}

impl<S: FactSource + 'static> EmitFactUseCase<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Execute the use case
    ///
    /// The fact is printed before it is appended. A failed fetch leaves the
    /// sink untouched; a failed append happens after the fact was printed.
    pub async fn execute(
        &self,
        input: EmitFactInput,
        printer: &dyn FactPrinter,
        sink: &dyn StepOutputSink,
    ) -> Result<Fact, EmitFactError> {
        info!("Fetching fact from {}", self.source.endpoint());
        let fact = self.source.fetch(&input.query).await?;
        debug!("Received fact ({} chars)", fact.char_len());

        printer.print(&fact).map_err(EmitFactError::Print)?;

        let output = StepOutput::for_fact(input.output_key, &fact);
        sink.append(&output)?;
        info!("Recorded output '{}' in {}", output.key(), sink.location());

        Ok(fact)
    }
}
