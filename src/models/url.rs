//! Url entity: an official source document location.

use std::collections::HashMap;

use serde_json::Value as JsonValue;

use super::{FieldValue, GraphEntity};

/// A URL pointing at an official document (bill text, proceedings).
#[derive(Debug, Clone, Default)]
pub struct Url {
    pub id: Option<String>,
    pub url: Option<String>,
    pub title: Option<String>,
    pub domain: Option<String>,
    pub extras: HashMap<String, JsonValue>,
}

impl Url {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GraphEntity for Url {
    fn entity_type(&self) -> &'static str {
        "Url"
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
            "url" => self.url.clone().map(FieldValue::String),
            "title" => self.title.clone().map(FieldValue::String),
            "domain" => self.domain.clone().map(FieldValue::String),
            _ => None,
        }
    }
}
