//! Typed domain models for the knowledge graph.

mod bill;
mod committee;
mod entity;
mod minutes;
mod news;
mod speech;
mod url;
mod value;

pub use bill::Bill;
pub use committee::Committee;
pub use entity::GraphEntity;
pub use minutes::Minutes;
pub use news::News;
pub use speech::Speech;
pub use url::Url;
pub use value::{FieldValue, LocalDateTime};
