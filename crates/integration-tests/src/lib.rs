//! Integration tests for the catalog API.
//!
//! Each test spawns the full application router on an ephemeral port and
//! talks to it over HTTP, so routing, middleware and the GraphQL transport
//! are exercised together.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p catalog-integration-tests
//! ```

use std::net::SocketAddr;

use catalog_api::config::CatalogConfig;
use catalog_api::routes;
use catalog_api::state::AppState;
use catalog_api::store::Store;
use reqwest::Client;
use serde_json::{Value, json};

/// A catalog server running in the background of the current test runtime.
pub struct TestServer {
    addr: SocketAddr,
    client: Client,
}

impl TestServer {
    /// Start a server over the built-in catalog with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if no local port can be bound.
    pub async fn spawn() -> std::io::Result<Self> {
        Self::spawn_with(CatalogConfig::default(), Store::seeded()).await
    }

    /// Start a server with the given configuration and store.
    ///
    /// The configured host and port are ignored; the server binds an
    /// ephemeral port on the loopback interface.
    ///
    /// # Errors
    ///
    /// Returns an error if no local port can be bound.
    pub async fn spawn_with(config: CatalogConfig, store: Store) -> std::io::Result<Self> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let app = routes::app(AppState::new(config, store));

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                panic!("test server on {addr} stopped: {e}");
            }
        });

        Ok(Self {
            addr,
            client: Client::new(),
        })
    }

    /// Absolute URL for `path` on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// The HTTP client bound to this server's tests.
    #[must_use]
    pub const fn client(&self) -> &Client {
        &self.client
    }

    /// POST a GraphQL operation and return the decoded response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    pub async fn graphql(&self, query: &str, variables: Value) -> reqwest::Result<Value> {
        self.client
            .post(self.url("/graphql"))
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?
            .json()
            .await
    }
}

/// Names under `data.<field>` of a GraphQL response, in order.
#[must_use]
pub fn names(response: &Value, field: &str) -> Vec<String> {
    response["data"][field]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item["name"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}
