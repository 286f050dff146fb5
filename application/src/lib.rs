//! Application layer for cat-facts
//!
//! This crate contains the fetch-and-emit use case and the ports it
//! drives. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    fact_printer::{FactPrinter, NoPrinter},
    fact_source::{FactSource, FactSourceError},
    step_output::{StepOutputError, StepOutputSink},
};
pub use use_cases::emit_fact::{EmitFactError, EmitFactInput, EmitFactUseCase};
