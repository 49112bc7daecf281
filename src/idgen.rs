//! Content-derived identity for graph entities.
//!
//! Ids are derived from the fields that make an entity *that* entity
//! (declared per type in the schema registry), not from a server-assigned
//! sequence. Re-ingesting the same logical entity therefore produces the
//! same id and merges into the same node instead of creating a duplicate.
//!
//! The derivation hashes a canonical envelope: a domain tag, the entity
//! type name, then each set identity field as a length-framed name/value
//! pair in schema declaration order. Framing keeps the input unambiguous
//! (`"ab" + "c"` never collides with `"a" + "bc"`), and declaration-order
//! iteration keeps it reproducible across processes and languages. The
//! type name participates both in the hash input and as the rendered id
//! prefix, so field-for-field identical entities of different types can
//! never collide.
//!
//! Output: `<TypeName>:<32 lowercase hex chars>` (SHA-256 truncated to
//! 128 bits). Relationships never get ids of their own; they are
//! addressed by their endpoint ids plus the relationship name.

use sha2::{Digest, Sha256};

use crate::error::AppError;
use crate::models::{FieldValue, GraphEntity};
use crate::schema::Registry;

/// Domain separator for the identity envelope.
///
/// Bump this if the envelope changes incompatibly.
const IDENTITY_DOMAIN_TAG: &[u8] = b"politigraph:identity:v1";

/// Digest prefix length kept in the rendered id (128 bits).
const DIGEST_BYTES: usize = 16;

/// Derive the stable id for an entity from its set identity fields.
///
/// Fails with [`AppError::InvalidEntity`] when none of the type's
/// identity fields is set: the id would be derived from an empty input.
/// Pure function; the entity is only read.
pub fn idgen<E: GraphEntity + ?Sized>(registry: &Registry, entity: &E) -> Result<String, AppError> {
    let def = registry.entity(entity.entity_type())?;

    let mut hasher = Sha256::new();
    hasher.update(IDENTITY_DOMAIN_TAG);
    write_str(&mut hasher, def.name);

    let mut fields_hashed = 0usize;
    for field in def.identity_fields() {
        if let Some(value) = entity.field(field.name) {
            write_str(&mut hasher, field.name);
            write_value(&mut hasher, &value);
            fields_hashed += 1;
        }
    }

    if fields_hashed == 0 {
        return Err(AppError::InvalidEntity {
            entity_type: def.name.to_string(),
        });
    }

    let digest = hasher.finalize();
    let mut id = String::with_capacity(def.name.len() + 1 + DIGEST_BYTES * 2);
    id.push_str(def.name);
    id.push(':');
    for byte in &digest[..DIGEST_BYTES] {
        id.push_str(&format!("{byte:02x}"));
    }
    Ok(id)
}

fn write_tag(hasher: &mut Sha256, tag: u8) {
    hasher.update([tag]);
}

fn write_str(hasher: &mut Sha256, value: &str) {
    hasher.update((value.len() as u64).to_be_bytes());
    hasher.update(value.as_bytes());
}

fn write_value(hasher: &mut Sha256, value: &FieldValue) {
    match value {
        FieldValue::String(s) => {
            write_tag(hasher, 1);
            write_str(hasher, s);
        }
        FieldValue::Int(i) => {
            write_tag(hasher, 2);
            hasher.update(i.to_be_bytes());
        }
        FieldValue::Float(f) => {
            write_tag(hasher, 3);
            hasher.update(f.to_be_bytes());
        }
        FieldValue::Bool(b) => {
            write_tag(hasher, 4);
            hasher.update([u8::from(*b)]);
        }
        FieldValue::StringList(items) => {
            write_tag(hasher, 5);
            hasher.update((items.len() as u64).to_be_bytes());
            for item in items {
                write_str(hasher, item);
            }
        }
        FieldValue::DateTime(dt) => {
            write_tag(hasher, 6);
            for (_, component) in dt.components() {
                match component {
                    Some(v) => {
                        write_tag(hasher, 1);
                        hasher.update(v.to_be_bytes());
                    }
                    None => write_tag(hasher, 0),
                }
            }
        }
    }
}
