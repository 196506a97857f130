// Port for durable attendee storage.
//
// Purpose
// - Describe what the use cases need from storage as a trait, without
//   implementing it.
//
// Boundaries
// - No concrete input or output here. Adapters implement this trait.
//
// Testing guidance
// - Use the in memory implementation for tests and local development.

use crate::modules::attendees::core::record::AttendeeRecord;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait AttendeeStore: Send + Sync {
    /// Persists one record per name, stamping each with the moment of
    /// insertion. The batch is written all-or-nothing; the stored records
    /// are returned.
    async fn insert_batch(&self, names: &[String]) -> Result<Vec<AttendeeRecord>, StoreError>;

    /// Returns every stored record, most recent confirmation first.
    async fn list_all(&self) -> Result<Vec<AttendeeRecord>, StoreError>;
}
