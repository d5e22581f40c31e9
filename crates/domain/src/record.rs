//! Records and collections — server-authoritative fetched data.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

/// The full list of records for a resource, as last returned by the server.
///
/// Replaced wholesale on every re-fetch; order is server-defined.
pub type Collection = Vec<Record>;

/// Server-assigned record identifier.
///
/// Backends differ: SQL-backed collections return integers, document stores
/// return strings. Both shapes are accepted on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => n.fmt(f),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

/// One fetched item: the server-assigned id plus the payload fields captured
/// as-is, including the creation timestamp when the server reports one.
///
/// Records are never mutated client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl Record {
    /// A field value by payload key.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&serde_json::Value> {
        self.fields.get(key)
    }

    /// A field value by payload key, as a string slice when it is one.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.field(key).and_then(serde_json::Value::as_str)
    }

    /// The server-reported creation time, under either the `createdAt` or
    /// `created_at` key, when present and RFC 3339.
    #[must_use]
    pub fn created_at(&self) -> Option<Timestamp> {
        self.text("createdAt")
            .or_else(|| self.text("created_at"))
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|parsed| parsed.with_timezone(&Utc))
    }
}
