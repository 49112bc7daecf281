//! Field values and the nested date/time scalar input.

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// A set field value read off a typed entity.
///
/// The operation builders consume these; entities hand them out through
/// [`GraphEntity::field`](super::GraphEntity::field) for fields that are
/// actually set.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    StringList(Vec<String>),
    DateTime(LocalDateTime),
}

/// A date/time broken into optional components, mirroring the store's
/// nested scalar input type.
///
/// Unset components are omitted when the value is rendered into an
/// operation, so a plain date stays `{year, month, day}` without
/// fabricated midnight times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalDateTime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minute: Option<i64>,
}

impl LocalDateTime {
    /// A calendar date.
    pub fn ymd(year: i64, month: i64, day: i64) -> Self {
        Self {
            year: Some(year),
            month: Some(month),
            day: Some(day),
            ..Self::default()
        }
    }

    /// A calendar date with a wall-clock time.
    pub fn ymd_hm(year: i64, month: i64, day: i64, hour: i64, minute: i64) -> Self {
        Self {
            year: Some(year),
            month: Some(month),
            day: Some(day),
            hour: Some(hour),
            minute: Some(minute),
        }
    }

    /// Components in their fixed rendering order.
    pub fn components(&self) -> [(&'static str, Option<i64>); 5] {
        [
            ("year", self.year),
            ("month", self.month),
            ("day", self.day),
            ("hour", self.hour),
            ("minute", self.minute),
        ]
    }

    /// True when every component is unset.
    pub fn is_empty(&self) -> bool {
        self.components().iter().all(|(_, v)| v.is_none())
    }
}

impl From<NaiveDate> for LocalDateTime {
    fn from(date: NaiveDate) -> Self {
        Self::ymd(
            i64::from(date.year()),
            i64::from(date.month()),
            i64::from(date.day()),
        )
    }
}

impl From<DateTime<Utc>> for LocalDateTime {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::ymd_hm(
            i64::from(dt.year()),
            i64::from(dt.month()),
            i64::from(dt.day()),
            i64::from(dt.hour()),
            i64::from(dt.minute()),
        )
    }
}
