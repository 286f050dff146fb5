//! Console printer for fetched facts

use catfact_application::FactPrinter;
use catfact_domain::Fact;
use std::io::Write;

/// Prints the raw fact to standard output
///
/// Exactly the fact text and one newline. No decoration, so the output can
/// be piped or captured as-is.
pub struct ConsoleFactPrinter;

impl FactPrinter for ConsoleFactPrinter {
    fn print(&self, fact: &Fact) -> std::io::Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        write_fact(&mut handle, fact)?;
        handle.flush()
    }
}

/// Write a fact as a single line
pub fn write_fact(writer: &mut impl Write, fact: &Fact) -> std::io::Result<()> {
    writeln!(writer, "{}", fact.text())
}
