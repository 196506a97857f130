use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One stored confirmation entry.
///
/// Records are append-only from the service's point of view: created once at
/// submission time, never updated, never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendeeRecord {
    /// Store-assigned, opaque. Consumers use it only as a rendering key.
    pub id: String,
    pub name: String,
    /// Stamped by the store at insertion, serialized as ISO-8601.
    pub confirmed_at: DateTime<Utc>,
}

impl AttendeeRecord {
    pub fn new(name: impl Into<String>, confirmed_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            name: name.into(),
            confirmed_at,
        }
    }
}
