//! Core domain concepts.
//!
//! - [`fact::Fact`] — the opaque text returned by the fact API
//! - [`query::FactQuery`] — optional constraints sent with the request
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod fact;
pub mod query;
pub mod string;
