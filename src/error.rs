//! Application error types for the client.

use thiserror::Error;

use crate::graphql::response::GraphqlError;

/// Application-level errors for Politigraph.
#[derive(Error, Debug)]
pub enum AppError {
    // Identity errors
    #[error("invalid entity: no identity field set on {entity_type}")]
    InvalidEntity { entity_type: String },

    #[error("missing identity: {entity_type} has no id assigned")]
    MissingIdentity { entity_type: String },

    // Schema lookup errors (programmer errors, fail fast)
    #[error("unknown entity type: {0}")]
    UnknownEntityType(String),

    #[error("unknown relationship: {0}")]
    UnknownRelationship(String),

    #[error("relationship {relationship} does not connect {from} to {to}")]
    TypeMismatch {
        relationship: String,
        from: String,
        to: String,
    },

    // Transport errors
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP status {status}: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    // GraphQL-level errors returned by the server
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    Graphql(Vec<GraphqlError>),

    #[error("malformed GraphQL response: {0}")]
    Protocol(String),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Config errors
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Render a GraphQL error list as a compact one-line summary.
fn format_graphql_errors(errors: &[GraphqlError]) -> String {
    match errors.first() {
        Some(first) if errors.len() == 1 => first.message.clone(),
        Some(first) => format!("{} (and {} more)", first.message, errors.len() - 1),
        None => "empty error list".to_string(),
    }
}
