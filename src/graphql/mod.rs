//! GraphQL operation construction and transport.
//!
//! Construction and execution are deliberately decoupled:
//!
//! - [`builder`] turns typed entities, id pairs and field lists into
//!   complete operation documents (pure string building, no I/O).
//! - [`GraphqlClient`] submits an operation over HTTP and hands back the
//!   parsed `{data, errors}` envelope body, failing on GraphQL-level
//!   errors instead of returning partial data.
//!
//! Anything that can execute an operation implements
//! [`GraphqlExecutor`], so tests and batching callers can substitute
//! their own transport.

pub mod builder;
pub mod client;
pub mod response;
pub mod traits;

pub use builder::{
    build_list_operation, build_merge_operation, build_relationship_between,
    build_relationship_operation,
};
pub use client::GraphqlClient;
pub use response::{
    GraphqlError, GraphqlErrorLocation, GraphqlPathSegment, GraphqlResponse, NodeRef,
    RelationshipView,
};
pub use traits::GraphqlExecutor;
