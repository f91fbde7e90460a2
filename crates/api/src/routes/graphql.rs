//! GraphQL transport handlers.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::response::Html;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Execute one GraphQL operation.
pub async fn execute(State(state): State<AppState>, request: GraphQLRequest) -> GraphQLResponse {
    state.schema().execute(request.into_inner()).await.into()
}

/// Serve the GraphiQL IDE pointed at `/graphql`.
///
/// # Errors
///
/// Returns `AppError::NotFound` when GraphiQL is disabled in configuration.
pub async fn graphiql(State(state): State<AppState>) -> Result<Html<String>> {
    if !state.config().graphiql {
        return Err(AppError::NotFound("GraphiQL is disabled".to_string()));
    }
    Ok(Html(GraphiQLSource::build().endpoint("/graphql").finish()))
}

/// Serve the schema as SDL.
pub async fn schema_sdl(State(state): State<AppState>) -> String {
    state.schema().sdl()
}
