//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation
//! adapters must implement.

pub mod fact_printer;
pub mod fact_source;
pub mod step_output;
