//! Transport trait for executing GraphQL operations.

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::error::AppError;

/// Executes GraphQL operation documents against an endpoint.
///
/// This is the seam between operation construction and transport:
/// builders produce strings, executors send them. Operation strings are
/// immutable once built, so they can equally be logged, diffed or
/// batched by a caller instead of executed.
#[async_trait]
pub trait GraphqlExecutor: Send + Sync {
    /// Execute one operation document and return the parsed response body.
    ///
    /// Implementations must surface a non-empty `errors` list as
    /// [`AppError::Graphql`] rather than returning partial data silently.
    async fn exec(&self, operation: &str) -> Result<JsonValue, AppError>;
}
