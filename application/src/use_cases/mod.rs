//! Use cases (application services)

pub mod emit_fact;
