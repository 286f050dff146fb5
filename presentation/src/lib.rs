//! Presentation layer for cat-facts
//!
//! This crate contains the CLI definition and the console printer.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::console::{ConsoleFactPrinter, write_fact};
