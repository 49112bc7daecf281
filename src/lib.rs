//! Politigraph - typed client for a political-process knowledge graph
//!
//! Bills, committees, minutes, speeches, news and source URLs, stored in
//! a graph behind a GraphQL endpoint. Entities carry content-derived ids
//! ([`idgen`]), so repeated ingestion merges instead of duplicating;
//! operations are synthesized from the schema registry ([`graphql`])
//! rather than hand-written.

pub mod cli;
pub mod config;
pub mod error;
pub mod graphql;
pub mod idgen;
pub mod models;
pub mod schema;
