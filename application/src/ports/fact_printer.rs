//! Fact printer port

use catfact_domain::Fact;

/// Shows a fetched fact to whoever ran the tool
///
/// The console adapter lives in the presentation layer.
pub trait FactPrinter: Send + Sync {
    fn print(&self, fact: &Fact) -> std::io::Result<()>;
}

/// Printer that discards everything
pub struct NoPrinter;

impl FactPrinter for NoPrinter {
    fn print(&self, _fact: &Fact) -> std::io::Result<()> {
        Ok(())
    }
}
