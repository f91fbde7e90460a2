//! CLI subcommands.

pub mod query;
pub mod schema;
pub mod seed;

use std::path::Path;

use catalog_api::seed::{SeedError, load_seed_file};
use catalog_api::store::Store;
use catalog_core::SeedData;

/// Build a store from a seed file, or the built-in catalog.
fn open_store(seed_file: Option<&Path>) -> Result<Store, SeedError> {
    let seed = match seed_file {
        Some(path) => load_seed_file(path)?,
        None => SeedData::builtin(),
    };
    Ok(Store::from_seed(seed))
}
