use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use attendees::modules::attendees::adapters::outbound::store::AttendeeStore;
use attendees::modules::attendees::adapters::outbound::store_lazy::{
    LazyAttendeeStore, MemoryConnector,
};
use attendees::modules::attendees::use_cases::confirm_presence::handler::ConfirmPresenceHandler;
use attendees::shell::config::Config;
use attendees::shell::http::router;
use attendees::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;

    // In-memory backend for now; a document store driver plugs in behind
    // the connector seam.
    let store: Arc<dyn AttendeeStore> =
        Arc::new(LazyAttendeeStore::new(MemoryConnector::new(config.database_url)));
    let confirm_handler = Arc::new(ConfirmPresenceHandler::new(store.clone()));

    let state = AppState {
        store,
        confirm_handler,
    };

    let app = router(state);

    let addr: SocketAddr = "0.0.0.0:8080".parse()?;
    tracing::info!("RSVP endpoint: http://{addr}/api/confirm");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
