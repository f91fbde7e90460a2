//! Seed document loading.
//!
//! Seed files are YAML; JSON documents parse as well since YAML is a
//! superset. Identifiers must be unique within each entity set.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use catalog_core::SeedData;
use thiserror::Error;
use tracing::info;

/// Errors loading a seed document.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse seed file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Duplicate {kind} id in seed: {id}")]
    DuplicateId { kind: &'static str, id: String },
}

/// Read, parse and validate a seed document.
///
/// # Errors
///
/// Returns `SeedError` if the file cannot be read or parsed, or if an id
/// repeats within an entity set.
pub fn load_seed_file(path: &Path) -> Result<SeedData, SeedError> {
    let content = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let seed = parse_seed(&content)?;

    info!(
        path = %path.display(),
        categories = seed.categories.len(),
        products = seed.products.len(),
        reviews = seed.reviews.len(),
        "Loaded seed file"
    );
    Ok(seed)
}

/// Parse and validate a seed document from text.
///
/// # Errors
///
/// Returns `SeedError::Parse` for malformed documents and
/// `SeedError::DuplicateId` for repeated ids.
pub fn parse_seed(content: &str) -> Result<SeedData, SeedError> {
    let seed: SeedData = serde_yaml::from_str(content)?;
    validate(&seed)?;
    Ok(seed)
}

/// Check that ids are unique within each entity set.
///
/// Cross references are not checked; they are weak by design of the store.
///
/// # Errors
///
/// Returns `SeedError::DuplicateId` naming the first repeated id.
pub fn validate(seed: &SeedData) -> Result<(), SeedError> {
    unique("category", seed.categories.iter().map(|c| c.id.as_str()))?;
    unique("product", seed.products.iter().map(|p| p.id.as_str()))?;
    unique("review", seed.reviews.iter().map(|r| r.id.as_str()))
}

fn unique<'a>(kind: &'static str, ids: impl Iterator<Item = &'a str>) -> Result<(), SeedError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SeedError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
