//! Trait implemented by every typed graph entity.

use super::FieldValue;

/// A typed node in the knowledge graph.
///
/// Implementations expose their set fields by GraphQL field name; the
/// identity generator and the operation builders drive iteration from
/// the schema registry's declaration order, so an implementation only
/// answers point lookups. Fields that are unset return `None` and are
/// never serialized.
///
/// Entities are owned by the caller. Nothing in this crate mutates one
/// except [`set_id`](GraphEntity::set_id), which the caller invokes once
/// content fields are stable.
pub trait GraphEntity {
    /// The schema name of this entity's type.
    fn entity_type(&self) -> &'static str;

    /// The content-derived id, if already assigned.
    fn id(&self) -> Option<&str>;

    /// Assign the content-derived id.
    fn set_id(&mut self, id: String);

    /// The value of a declared field, by GraphQL field name, if set.
    fn field(&self, name: &str) -> Option<FieldValue>;
}
