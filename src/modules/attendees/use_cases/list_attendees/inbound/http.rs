use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::modules::attendees::use_cases::list_attendees::view::{ListFilter, shape};
use crate::shell::http::ApiMessage;
use crate::shell::state::AppState;

#[derive(Deserialize, Default)]
pub struct ListAttendeesParams {
    pub since: Option<DateTime<Utc>>,
    pub dedup: Option<bool>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListAttendeesParams>,
) -> impl IntoResponse {
    match state.store.list_all().await {
        Ok(records) => {
            let filter = ListFilter {
                since: params.since,
                dedup: params.dedup.unwrap_or(false),
            };
            Json(shape(records, filter)).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "list attendees failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiMessage::new("Server error")),
            )
                .into_response()
        }
    }
}
