//! News entity: a published news article.

use std::collections::HashMap;

use serde_json::Value as JsonValue;

use super::{FieldValue, GraphEntity, LocalDateTime};

/// A news article referencing political activity.
#[derive(Debug, Clone, Default)]
pub struct News {
    pub id: Option<String>,
    pub url: Option<String>,
    pub title: Option<String>,
    pub publisher: Option<String>,
    pub is_paid: Option<bool>,
    pub published_at: Option<LocalDateTime>,
    pub extras: HashMap<String, JsonValue>,
}

impl News {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GraphEntity for News {
    fn entity_type(&self) -> &'static str {
        "News"
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
            "publisher" => self.publisher.clone().map(FieldValue::String),
            "isPaid" => self.is_paid.map(FieldValue::Bool),
            "publishedAt" => self.published_at.map(FieldValue::DateTime),
            _ => None,
        }
    }
}
