//! GraphQL response envelope types.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Location of an error within the operation document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphqlErrorLocation {
    /// Line number in the operation (1-based).
    pub line: u32,
    /// Column number in the operation (1-based).
    pub column: u32,
}

/// A path segment within the response data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GraphqlPathSegment {
    /// Field name.
    Key(String),
    /// Array index.
    Index(i64),
}

/// One entry of the response `errors` list (per the GraphQL spec).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphqlError {
    /// Human-readable error message.
    pub message: String,
    /// Location(s) within the operation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<GraphqlErrorLocation>,
    /// Path within the response where the error occurred.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<GraphqlPathSegment>,
}

impl GraphqlError {
    /// An error carrying only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: Vec::new(),
            path: Vec::new(),
        }
    }
}

/// The standard `{data, errors}` response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphqlResponse {
    /// Response data.
    #[serde(default)]
    pub data: Option<JsonValue>,
    /// GraphQL errors.
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
    /// Extensions payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<JsonValue>,
}

/// A node referenced only by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRef {
    pub id: String,
}

/// Normalized view of a merged relationship: both endpoints by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipView {
    pub from: NodeRef,
    pub to: NodeRef,
}
