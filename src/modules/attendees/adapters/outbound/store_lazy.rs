// Lazily connected attendee store.
//
// Purpose
// - Defer opening the backing connection until the first request needs it.
//
// Responsibilities
// - Funnel every port operation through the shared `Lazy` handle.
// - Keep the connector seam open for a real document store driver.

use crate::modules::attendees::adapters::outbound::store::{AttendeeStore, StoreError};
use crate::modules::attendees::adapters::outbound::store_in_memory::InMemoryAttendeeStore;
use crate::modules::attendees::core::record::AttendeeRecord;
use crate::shared::infrastructure::lazy::Lazy;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait StoreConnector: Send + Sync {
    type Store: AttendeeStore + 'static;

    async fn connect(&self) -> Result<Self::Store, StoreError>;
}

pub struct LazyAttendeeStore<C: StoreConnector> {
    connector: C,
    connection: Lazy<C::Store>,
}

impl<C: StoreConnector> LazyAttendeeStore<C> {
    pub fn new(connector: C) -> Self {
        Self {
            connector,
            connection: Lazy::new(),
        }
    }

    async fn store(&self) -> Result<Arc<C::Store>, StoreError> {
        self.connection
            .get_or_try_init(|| self.connector.connect())
            .await
    }
}

#[async_trait]
impl<C: StoreConnector> AttendeeStore for LazyAttendeeStore<C> {
    async fn insert_batch(&self, names: &[String]) -> Result<Vec<AttendeeRecord>, StoreError> {
        self.store().await?.insert_batch(names).await
    }

    async fn list_all(&self) -> Result<Vec<AttendeeRecord>, StoreError> {
        self.store().await?.list_all().await
    }
}

/// Connector for the in memory backend, selected by a `memory://` connection
/// string. Stands in for a document store driver in local setups; any other
/// scheme is reported as unavailable.
pub struct MemoryConnector {
    connection_string: String,
}

impl MemoryConnector {
    pub fn new(connection_string: impl Into<String>) -> Self {
        Self {
            connection_string: connection_string.into(),
        }
    }
}

#[async_trait]
impl StoreConnector for MemoryConnector {
    type Store = InMemoryAttendeeStore;

    async fn connect(&self) -> Result<InMemoryAttendeeStore, StoreError> {
        if self.connection_string.starts_with("memory://") {
            Ok(InMemoryAttendeeStore::new())
        } else {
            Err(StoreError::Unavailable(format!(
                "unsupported connection string: {}",
                self.connection_string
            )))
        }
    }
}
