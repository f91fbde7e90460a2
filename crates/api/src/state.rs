//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::CatalogConfig;
use crate::graphql::{CatalogSchema, build_schema};
use crate::store::Store;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// store, the GraphQL schema built over it, and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: CatalogConfig,
    store: Store,
    schema: CatalogSchema,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The schema is built over `store` with the configured depth limit.
    #[must_use]
    pub fn new(config: CatalogConfig, store: Store) -> Self {
        let schema = build_schema(store.clone(), config.depth_limit);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                schema,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &CatalogConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog store.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.inner.store
    }

    /// Get a reference to the GraphQL schema.
    #[must_use]
    pub fn schema(&self) -> &CatalogSchema {
        &self.inner.schema
    }
}
