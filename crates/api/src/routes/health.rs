//! Health check handlers.

use axum::extract::State;

use crate::error::Result;
use crate::state::AppState;

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// # Errors
///
/// Returns `AppError::Store` (500) if the store lock is poisoned.
pub async fn readiness(State(state): State<AppState>) -> Result<&'static str> {
    state.store().ping()?;
    Ok("ok")
}
