//! Seed document inspection.
//!
//! Loading goes through the store so the output reflects exactly what the
//! server would start with.

use std::io::Write;
use std::path::Path;

use tracing::info;

use super::open_store;
use crate::SeedFormat;

/// Write a seed document to stdout.
///
/// # Arguments
///
/// * `format` - YAML or JSON output
/// * `seed_file` - Seed file to validate and re-emit; the built-in catalog if `None`
///
/// # Errors
///
/// Returns an error if the seed file is invalid or stdout cannot be written.
pub fn print(format: SeedFormat, seed_file: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(seed_file)?;
    let snapshot = store.snapshot()?;

    info!(
        categories = snapshot.categories.len(),
        products = snapshot.products.len(),
        reviews = snapshot.reviews.len(),
        "Seed document ready"
    );

    let rendered = match format {
        SeedFormat::Yaml => serde_yaml::to_string(&snapshot)?,
        SeedFormat::Json => serde_json::to_string_pretty(&snapshot)?,
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", rendered.trim_end())?;
    Ok(())
}
