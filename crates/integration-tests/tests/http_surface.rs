//! Integration tests for the HTTP routes around the GraphQL endpoint.

use catalog_api::config::CatalogConfig;
use catalog_api::store::Store;
use catalog_integration_tests::TestServer;
use reqwest::StatusCode;

async fn server() -> TestServer {
    TestServer::spawn().await.expect("Failed to start server")
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health() {
    let server = server().await;
    let resp = server
        .client()
        .get(server.url("/health"))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.expect("body"), "ok");
}

#[tokio::test]
async fn test_readiness() {
    let server = server().await;
    let resp = server
        .client()
        .get(server.url("/health/ready"))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(resp.status(), StatusCode::OK);
}

// =============================================================================
// Request IDs
// =============================================================================

#[tokio::test]
async fn test_request_id_generated() {
    let server = server().await;
    let resp = server
        .client()
        .get(server.url("/health"))
        .send()
        .await
        .expect("Request failed");

    let id = resp
        .headers()
        .get("x-request-id")
        .expect("x-request-id should be set");
    assert_eq!(id.len(), 36);
}

#[tokio::test]
async fn test_request_id_echoed() {
    let server = server().await;
    let resp = server
        .client()
        .get(server.url("/health"))
        .header("x-request-id", "trace-abc")
        .send()
        .await
        .expect("Request failed");

    assert_eq!(
        resp.headers().get("x-request-id").map(|v| v.to_str().ok()),
        Some(Some("trace-abc"))
    );
}

// =============================================================================
// GraphiQL and SDL
// =============================================================================

#[tokio::test]
async fn test_graphiql_served_by_default() {
    let server = server().await;
    let resp = server
        .client()
        .get(server.url("/graphql"))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.text().await.expect("body").contains("graphiql"));
}

#[tokio::test]
async fn test_graphiql_disabled() {
    let config = CatalogConfig {
        graphiql: false,
        ..CatalogConfig::default()
    };
    let server = TestServer::spawn_with(config, Store::seeded())
        .await
        .expect("Failed to start server");

    let resp = server
        .client()
        .get(server.url("/graphql"))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_schema_sdl() {
    let server = server().await;
    let resp = server
        .client()
        .get(server.url("/schema.graphql"))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let sdl = resp.text().await.expect("body");
    assert!(sdl.contains("type Query"));
    assert!(sdl.contains("input ProductsFilterInput"));
}

#[tokio::test]
async fn test_empty_store_serves_empty_lists() {
    let server = TestServer::spawn_with(CatalogConfig::default(), Store::new())
        .await
        .expect("Failed to start server");

    let body = server
        .graphql("{ categories { id } products { id } }", serde_json::Value::Null)
        .await
        .expect("Request failed");
    assert_eq!(body["data"]["categories"], serde_json::json!([]));
    assert_eq!(body["data"]["products"], serde_json::json!([]));
}
