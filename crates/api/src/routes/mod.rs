//! HTTP routes.
//!
//! # Route Structure
//!
//! ```text
//! POST /graphql          - Execute a GraphQL operation
//! GET  /graphql          - GraphiQL IDE (when enabled)
//! GET  /schema.graphql   - Schema as SDL
//! GET  /health           - Liveness check
//! GET  /health/ready     - Readiness check (store usable)
//! ```

pub mod graphql;
pub mod health;

use axum::{Router, middleware::from_fn, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::{make_request_span, request_id_middleware};
use crate::state::AppState;

/// Create the route table.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/graphql", get(graphql::graphiql).post(graphql::execute))
        .route("/schema.graphql", get(graphql::schema_sdl))
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
}

/// Create the full application router with middleware and state attached.
///
/// Sentry layers are not included; the binary adds them outermost.
pub fn app(state: AppState) -> Router {
    routes()
        .layer(from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use super::*;
    use crate::config::CatalogConfig;
    use crate::store::Store;

    fn test_app(config: CatalogConfig) -> Router {
        app(AppState::new(config, Store::seeded()))
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_routes() {
        let app = test_app(CatalogConfig::default());

        for path in ["/health", "/health/ready"] {
            let response = app
                .clone()
                .oneshot(Request::get(path).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(body_text(response).await, "ok");
        }
    }

    #[tokio::test]
    async fn test_post_graphql() {
        let response = test_app(CatalogConfig::default())
            .oneshot(
                Request::post("/graphql")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"query":"{ hello }"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["data"]["hello"], "Hello World!");
    }

    #[tokio::test]
    async fn test_graphiql_toggle() {
        let enabled = test_app(CatalogConfig::default())
            .oneshot(Request::get("/graphql").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(enabled.status(), StatusCode::OK);

        let config = CatalogConfig {
            graphiql: false,
            ..CatalogConfig::default()
        };
        let disabled = test_app(config)
            .oneshot(Request::get("/graphql").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(disabled.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_request_id_header() {
        let response = test_app(CatalogConfig::default())
            .oneshot(
                Request::get("/health")
                    .header("x-request-id", "abc-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()["x-request-id"], "abc-123");
    }

    #[tokio::test]
    async fn test_schema_sdl_route() {
        let response = test_app(CatalogConfig::default())
            .oneshot(Request::get("/schema.graphql").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("type Mutation"));
    }
}
