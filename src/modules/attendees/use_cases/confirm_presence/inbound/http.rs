use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::attendees::use_cases::confirm_presence::command::ConfirmPresence;
use crate::modules::attendees::use_cases::confirm_presence::handler::ApplicationError;
use crate::shell::http::ApiMessage;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ConfirmPresenceBody {
    pub names: Vec<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<ConfirmPresenceBody>, JsonRejection>,
) -> impl IntoResponse {
    // A body that is not an object with a `names` array is the same caller
    // mistake as an empty batch; both get the 400 shape.
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiMessage::new("Please provide at least one name.")),
            )
                .into_response();
        }
    };

    let command = ConfirmPresence { names: body.names };

    match state.confirm_handler.handle(command).await {
        Ok(stored) => {
            tracing::info!(stored, "presence confirmed");
            (
                StatusCode::CREATED,
                Json(ApiMessage::new("Presence confirmed successfully!")),
            )
                .into_response()
        }
        Err(ApplicationError::Invalid(err)) => (
            StatusCode::BAD_REQUEST,
            Json(ApiMessage::new(err.to_string())),
        )
            .into_response(),
        Err(ApplicationError::Store(err)) => {
            // Internal detail stays in the logs; the caller sees a generic
            // failure.
            tracing::error!(error = %err, "confirm presence failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiMessage::new("Server error")),
            )
                .into_response()
        }
    }
}
