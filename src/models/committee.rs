//! Committee entity: a standing or special committee.

use std::collections::HashMap;

use serde_json::Value as JsonValue;

use super::{FieldValue, GraphEntity};

/// A committee of either chamber.
#[derive(Debug, Clone, Default)]
pub struct Committee {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub topics: Option<Vec<String>>,
    pub extras: HashMap<String, JsonValue>,
}

impl Committee {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GraphEntity for Committee {
    fn entity_type(&self) -> &'static str {
        "Committee"
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
            "description" => self.description.clone().map(FieldValue::String),
            "topics" => self.topics.clone().map(FieldValue::StringList),
            _ => None,
        }
    }
}
