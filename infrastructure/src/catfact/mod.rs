//! **Cat Fact API** adapter
//!
//! Implements [`FactSource`](catfact_application::FactSource) against
//! <https://catfact.ninja>, whose `/fact` endpoint answers a plain GET with
//!
//! ```json
//! {"fact": "Cats sleep 70% of their lives.", "length": 30}
//! ```
//!
//! Only the configured field (default `fact`) is read. The endpoint also
//! accepts `?max_length=N` to cap the fact length.

mod client;
mod response;

pub use client::{CatFactClient, DEFAULT_FACT_FIELD, DEFAULT_FACT_URL, DEFAULT_TIMEOUT_SECS};
pub use response::extract_fact;
