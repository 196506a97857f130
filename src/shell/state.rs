use crate::modules::attendees::adapters::outbound::store::AttendeeStore;
use crate::modules::attendees::use_cases::confirm_presence::handler::ConfirmPresenceHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AttendeeStore>,
    pub confirm_handler: Arc<ConfirmPresenceHandler>,
}
