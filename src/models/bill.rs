//! Bill entity: a legislative proposal.

use std::collections::HashMap;

use serde_json::Value as JsonValue;

use super::{FieldValue, GraphEntity, LocalDateTime};

/// A bill submitted to the legislature.
///
/// All schema fields are optional; `None` means unset and is never
/// serialized. `extras` is an opaque scratch map for callers (crawler
/// state, provenance notes); the operation builders never read it.
#[derive(Debug, Clone, Default)]
pub struct Bill {
    pub id: Option<String>,
    pub name: Option<String>,
    pub bill_number: Option<String>,
    pub category: Option<String>,
    pub reason: Option<String>,
    pub submitted_date: Option<LocalDateTime>,
    pub extras: HashMap<String, JsonValue>,
}

impl Bill {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GraphEntity for Bill {
    fn entity_type(&self) -> &'static str {
        "Bill"
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => self.id.clone().map(FieldValue::String),
            "name" => self.name.clone().map(FieldValue::String),
            "billNumber" => self.bill_number.clone().map(FieldValue::String),
            "category" => self.category.clone().map(FieldValue::String),
            "reason" => self.reason.clone().map(FieldValue::String),
            "submittedDate" => self.submitted_date.map(FieldValue::DateTime),
            _ => None,
        }
    }
}
