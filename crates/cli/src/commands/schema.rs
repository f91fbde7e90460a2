//! Schema export.

use std::io::Write;

/// Write the schema SDL to stdout.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn print() -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", catalog_api::graphql::sdl())
}
