//! Minutes entity: the record of one committee or plenary meeting.

use std::collections::HashMap;

use serde_json::Value as JsonValue;

use super::{FieldValue, GraphEntity, LocalDateTime};

/// The minutes of a single meeting.
#[derive(Debug, Clone, Default)]
pub struct Minutes {
    pub id: Option<String>,
    pub name: Option<String>,
    pub summary: Option<String>,
    pub topics: Option<Vec<String>>,
    pub start_date_time: Option<LocalDateTime>,
    pub extras: HashMap<String, JsonValue>,
}

impl Minutes {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GraphEntity for Minutes {
    fn entity_type(&self) -> &'static str {
        "Minutes"
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
            "summary" => self.summary.clone().map(FieldValue::String),
            "topics" => self.topics.clone().map(FieldValue::StringList),
            "startDateTime" => self.start_date_time.map(FieldValue::DateTime),
            _ => None,
        }
    }
}
