use crate::modules::attendees::adapters::outbound::store::{AttendeeStore, StoreError};
use crate::modules::attendees::use_cases::confirm_presence::command::ConfirmPresence;
use crate::modules::attendees::use_cases::confirm_presence::validate::{
    ValidationError, normalize_names,
};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct ConfirmPresenceHandler {
    store: Arc<dyn AttendeeStore>,
}

impl ConfirmPresenceHandler {
    pub fn new(store: Arc<dyn AttendeeStore>) -> Self {
        Self { store }
    }

    /// Validates the batch and persists the surviving names. Returns how
    /// many records were stored.
    pub async fn handle(&self, command: ConfirmPresence) -> Result<usize, ApplicationError> {
        let names = normalize_names(&command.names)?;
        let records = self.store.insert_batch(&names).await?;
        Ok(records.len())
    }
}
