//! Speech entity: one speaker's turn within a meeting.

use std::collections::HashMap;

use serde_json::Value as JsonValue;

use super::{FieldValue, GraphEntity};

/// A single speech inside a set of minutes.
#[derive(Debug, Clone, Default)]
pub struct Speech {
    pub id: Option<String>,
    pub name: Option<String>,
    pub speaker_name: Option<String>,
    pub order_in_minutes: Option<i64>,
    pub extras: HashMap<String, JsonValue>,
}

impl Speech {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GraphEntity for Speech {
    fn entity_type(&self) -> &'static str {
        "Speech"
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
            "speakerName" => self.speaker_name.clone().map(FieldValue::String),
            "orderInMinutes" => self.order_in_minutes.map(FieldValue::Int),
            _ => None,
        }
    }
}
