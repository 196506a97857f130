// In memory implementation of the AttendeeStore port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Keep records in insertion order behind a lock.
// - Sort by confirmation time on read.

use crate::modules::attendees::adapters::outbound::store::{AttendeeStore, StoreError};
use crate::modules::attendees::core::record::AttendeeRecord;
use chrono::Utc;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryAttendeeStore {
    rows: RwLock<Vec<AttendeeRecord>>,
    is_offline: bool,
}

impl InMemoryAttendeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl AttendeeStore for InMemoryAttendeeStore {
    async fn insert_batch(&self, names: &[String]) -> Result<Vec<AttendeeRecord>, StoreError> {
        if self.is_offline {
            return Err(StoreError::Unavailable("Attendee store offline".into()));
        }

        // One stamp per batch: every name in a submission shares the moment
        // of insertion.
        let confirmed_at = Utc::now();
        let records: Vec<AttendeeRecord> = names
            .iter()
            .map(|name| AttendeeRecord::new(name.clone(), confirmed_at))
            .collect();

        // Single write under the lock makes the batch all-or-nothing.
        let mut guard = self.rows.write().await;
        guard.extend(records.iter().cloned());
        Ok(records)
    }

    async fn list_all(&self) -> Result<Vec<AttendeeRecord>, StoreError> {
        if self.is_offline {
            return Err(StoreError::Unavailable("Attendee store offline".into()));
        }

        let guard = self.rows.read().await;
        let mut items = guard.clone();
        // Stable sort keeps insertion order among equal timestamps.
        items.sort_by(|a, b| b.confirmed_at.cmp(&a.confirmed_at));
        Ok(items)
    }
}
