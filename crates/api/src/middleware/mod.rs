//! HTTP middleware stack.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors, added in `main`)
//! 2. CORS (browser GraphQL clients on other origins)
//! 3. `TraceLayer` (one span per request, see [`make_request_span`])
//! 4. Request ID (recorded into the request span)

pub mod request_id;

use axum::extract::Request;
use tracing::Span;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};

/// Build the per-request tracing span.
///
/// `request_id` starts empty and is filled in by [`request_id_middleware`].
pub fn make_request_span(request: &Request) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = tracing::field::Empty,
    )
}
