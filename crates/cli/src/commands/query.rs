//! One-off GraphQL execution.
//!
//! Mutations only affect the throwaway store built for this invocation.

use std::io::Write;
use std::path::Path;

use async_graphql::{Request, Variables};
use catalog_api::graphql::{DEFAULT_DEPTH_LIMIT, build_schema};
use thiserror::Error;

use super::open_store;

/// Errors specific to the `query` command.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Variables must be a JSON object: {0}")]
    InvalidVariables(String),
    #[error("Operation returned {0} error(s)")]
    Failed(usize),
}

/// Execute `document` and write the JSON response to stdout.
///
/// # Errors
///
/// Returns an error if the variables or seed file are invalid, if stdout
/// cannot be written, or if the response carries GraphQL errors (the
/// response is still printed first).
pub async fn run(
    document: &str,
    variables: Option<&str>,
    seed_file: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let variables = parse_variables(variables)?;
    let schema = build_schema(open_store(seed_file)?, DEFAULT_DEPTH_LIMIT);

    let response = schema
        .execute(Request::new(document).variables(variables))
        .await;
    let error_count = response.errors.len();

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", serde_json::to_string_pretty(&response)?)?;

    if error_count > 0 {
        return Err(QueryError::Failed(error_count).into());
    }
    Ok(())
}

fn parse_variables(raw: Option<&str>) -> Result<Variables, QueryError> {
    let Some(raw) = raw else {
        return Ok(Variables::default());
    };

    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| QueryError::InvalidVariables(e.to_string()))?;
    if !value.is_object() {
        return Err(QueryError::InvalidVariables(
            "expected an object".to_string(),
        ));
    }
    Ok(Variables::from_json(value))
}
