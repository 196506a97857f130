use axum::{
    Json, Router,
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::modules::attendees::use_cases::confirm_presence::inbound::http as confirm_http;
use crate::modules::attendees::use_cases::list_attendees::inbound::http as list_http;
use crate::shell::state::AppState;

/// Wire shape shared by every non-payload response.
#[derive(Serialize)]
pub struct ApiMessage {
    pub message: String,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/confirm", post(confirm_http::handle).fallback(fallback))
        .route("/api/attendees", get(list_http::handle).fallback(fallback))
        .fallback(fallback)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Browsers probe paths with OPTIONS before a cross origin call; answer those
// with an empty 204. Everything else unmatched gets the 404 shape, including
// wrong methods on known paths.
async fn fallback(method: Method) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::NO_CONTENT.into_response();
    }
    (StatusCode::NOT_FOUND, Json(ApiMessage::new("Not Found"))).into_response()
}
