//! Read-only schema registry for entity and relationship metadata.
//!
//! The registry is the single catalog the identity generator and the
//! operation builders consult: which entity types exist, which fields
//! they carry (and of what kind), which fields participate in identity
//! derivation, and which named relationships connect which types.
//!
//! It is loaded once and never mutated afterwards. [`Registry::global`]
//! returns the built-in catalog shared by the whole process; callers
//! with a different schema can construct their own [`Registry`] and pass
//! it to the builders explicitly.
//!
//! Lookup misses are programmer errors (a name that is not part of the
//! schema), so they fail fast with [`AppError::UnknownEntityType`] or
//! [`AppError::UnknownRelationship`] rather than being skipped.

use once_cell::sync::Lazy;

use crate::error::AppError;

/// Scalar kinds supported by the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    String,
    Int,
    Float,
    Boolean,
}

/// The kind of a declared entity field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A plain scalar value.
    Scalar(ScalarKind),
    /// An ordered list of scalar values.
    ScalarList(ScalarKind),
    /// A nested scalar input object (a date/time broken into components).
    DateTimeInput,
    /// A typed edge to other entities. Never serialized by the entity
    /// merge builder; edges are merged through relationship operations.
    Relationship,
}

/// A single declared field of an entity type.
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// GraphQL field name (camelCase).
    pub name: &'static str,
    pub kind: FieldKind,
    /// Whether this field participates in identity derivation.
    pub identity: bool,
}

impl FieldDef {
    const fn scalar(name: &'static str, kind: ScalarKind) -> Self {
        Self {
            name,
            kind: FieldKind::Scalar(kind),
            identity: false,
        }
    }

    const fn identity(name: &'static str, kind: ScalarKind) -> Self {
        Self {
            name,
            kind: FieldKind::Scalar(kind),
            identity: true,
        }
    }

    const fn list(name: &'static str, kind: ScalarKind) -> Self {
        Self {
            name,
            kind: FieldKind::ScalarList(kind),
            identity: false,
        }
    }

    const fn datetime(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::DateTimeInput,
            identity: false,
        }
    }

    const fn relationship(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Relationship,
            identity: false,
        }
    }
}

/// A declared entity type: a name plus its ordered field list.
///
/// Field order is schema declaration order; the identity generator and
/// the merge builder both iterate it, which is what makes their output
/// reproducible across processes.
#[derive(Debug, Clone)]
pub struct EntityDef {
    pub name: &'static str,
    pub fields: Vec<FieldDef>,
}

impl EntityDef {
    /// Look up a declared field by GraphQL name.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields participating in identity derivation, in declaration order.
    pub fn identity_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| f.identity)
    }
}

/// A declared directed relationship between two entity types.
///
/// `name` is the GraphQL field name on the from-type (`referredBills`,
/// `belongedToMinutes`), so the same semantic edge can be declared from
/// several source types without colliding.
#[derive(Debug, Clone)]
pub struct RelationshipDef {
    pub name: &'static str,
    pub from: &'static str,
    pub to: &'static str,
}

impl RelationshipDef {
    /// Mutation name for merging this edge: `Merge<FromType><Name>`.
    ///
    /// The from-type prefix keeps same-named relationships from distinct
    /// source types distinct (`MergeUrlReferredBills` vs
    /// `MergeNewsReferredBills`).
    pub fn mutation_name(&self) -> String {
        let mut chars = self.name.chars();
        let pascal = match chars.next() {
            Some(first) => format!("{}{}", first.to_ascii_uppercase(), chars.as_str()),
            None => String::new(),
        };
        format!("Merge{}{}", self.from, pascal)
    }
}

/// In-memory catalog of entity and relationship definitions.
#[derive(Debug, Clone)]
pub struct Registry {
    entities: Vec<EntityDef>,
    relationships: Vec<RelationshipDef>,
}

impl Registry {
    /// Create a registry from explicit definitions.
    pub fn new(entities: Vec<EntityDef>, relationships: Vec<RelationshipDef>) -> Self {
        Self {
            entities,
            relationships,
        }
    }

    /// The process-wide built-in catalog.
    pub fn global() -> &'static Registry {
        static GLOBAL: Lazy<Registry> = Lazy::new(builtin);
        &GLOBAL
    }

    /// Look up an entity type by name.
    pub fn entity(&self, name: &str) -> Result<&EntityDef, AppError> {
        self.entities
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| AppError::UnknownEntityType(name.to_string()))
    }

    /// Look up a relationship by name and source type.
    ///
    /// Fails with [`AppError::UnknownRelationship`] when no relationship
    /// carries the name at all, and with [`AppError::TypeMismatch`] when
    /// the name exists but not from the given source type.
    pub fn relationship(&self, from: &str, name: &str) -> Result<&RelationshipDef, AppError> {
        let mut named = self.relationships.iter().filter(|r| r.name == name);
        let first = named
            .clone()
            .next()
            .ok_or_else(|| AppError::UnknownRelationship(name.to_string()))?;
        named.find(|r| r.from == from).ok_or_else(|| {
            AppError::TypeMismatch {
                relationship: name.to_string(),
                from: from.to_string(),
                to: first.to.to_string(),
            }
        })
    }

    /// Look up a relationship by name and both endpoint types.
    pub fn resolve_relationship(
        &self,
        name: &str,
        from: &str,
        to: &str,
    ) -> Result<&RelationshipDef, AppError> {
        if !self.relationships.iter().any(|r| r.name == name) {
            return Err(AppError::UnknownRelationship(name.to_string()));
        }
        self.relationships
            .iter()
            .find(|r| r.name == name && r.from == from && r.to == to)
            .ok_or_else(|| AppError::TypeMismatch {
                relationship: name.to_string(),
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    /// All declared relationships.
    pub fn relationships(&self) -> &[RelationshipDef] {
        &self.relationships
    }
}

/// The built-in political-process catalog.
fn builtin() -> Registry {
    use ScalarKind::{Boolean, Int, String};

    let entities = vec![
        EntityDef {
            name: "Bill",
            fields: vec![
                FieldDef::scalar("id", String),
                FieldDef::identity("name", String),
                FieldDef::identity("billNumber", String),
                FieldDef::scalar("category", String),
                FieldDef::scalar("reason", String),
                FieldDef::datetime("submittedDate"),
            ],
        },
        EntityDef {
            name: "Committee",
            fields: vec![
                FieldDef::scalar("id", String),
                FieldDef::identity("name", String),
                FieldDef::scalar("description", String),
                FieldDef::list("topics", String),
            ],
        },
        EntityDef {
            name: "Minutes",
            fields: vec![
                FieldDef::scalar("id", String),
                FieldDef::identity("name", String),
                FieldDef::scalar("summary", String),
                FieldDef::list("topics", String),
                FieldDef::datetime("startDateTime"),
                FieldDef::relationship("discussedBills"),
                FieldDef::relationship("belongedToCommittee"),
            ],
        },
        EntityDef {
            name: "Speech",
            fields: vec![
                FieldDef::scalar("id", String),
                FieldDef::identity("name", String),
                FieldDef::scalar("speakerName", String),
                FieldDef::scalar("orderInMinutes", Int),
                FieldDef::relationship("belongedToMinutes"),
            ],
        },
        EntityDef {
            name: "News",
            fields: vec![
                FieldDef::scalar("id", String),
                FieldDef::identity("url", String),
                FieldDef::scalar("title", String),
                FieldDef::scalar("publisher", String),
                FieldDef::scalar("isPaid", Boolean),
                FieldDef::datetime("publishedAt"),
                FieldDef::relationship("referredBills"),
            ],
        },
        EntityDef {
            name: "Url",
            fields: vec![
                FieldDef::scalar("id", String),
                FieldDef::identity("url", String),
                FieldDef::scalar("title", String),
                FieldDef::scalar("domain", String),
                FieldDef::relationship("referredBills"),
            ],
        },
    ];

    let relationships = vec![
        RelationshipDef {
            name: "referredBills",
            from: "Url",
            to: "Bill",
        },
        RelationshipDef {
            name: "referredBills",
            from: "News",
            to: "Bill",
        },
        RelationshipDef {
            name: "discussedBills",
            from: "Minutes",
            to: "Bill",
        },
        RelationshipDef {
            name: "belongedToMinutes",
            from: "Speech",
            to: "Minutes",
        },
        RelationshipDef {
            name: "belongedToCommittee",
            from: "Minutes",
            to: "Committee",
        },
    ];

    Registry::new(entities, relationships)
}
