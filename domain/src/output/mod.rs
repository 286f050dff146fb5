//! Step output values written for the CI runner.
//!
//! A step output is a single `key=value` line appended to the file the
//! runner hands us. The value is written verbatim.

pub mod key;
pub mod step_output;
