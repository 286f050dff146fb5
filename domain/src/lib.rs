//! Domain layer for cat-facts
//!
//! This crate contains the value objects the tool passes around.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Fact**: opaque text fetched from the fact API
//! - **Step output**: a `key=value` line handed to the CI runner

pub mod core;
pub mod output;

// Re-export commonly used types
pub use self::core::{error::DomainError, fact::Fact, query::FactQuery, string::truncate};
pub use output::{
    key::{DEFAULT_OUTPUT_KEY, OutputKey},
    step_output::StepOutput,
};
