// End to end tests for the confirm-and-list flow over the full router,
// backed by the lazily connected in memory store.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{DateTime, Utc};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::attendees::adapters::outbound::store::AttendeeStore;
use crate::modules::attendees::adapters::outbound::store_lazy::{
    LazyAttendeeStore, MemoryConnector,
};
use crate::modules::attendees::use_cases::confirm_presence::handler::ConfirmPresenceHandler;
use crate::shell::http::router;
use crate::shell::state::AppState;

fn make_app() -> Router {
    let store: Arc<dyn AttendeeStore> = Arc::new(LazyAttendeeStore::new(MemoryConnector::new(
        "memory://attendees-e2e",
    )));
    let confirm_handler = Arc::new(ConfirmPresenceHandler::new(store.clone()));
    router(AppState {
        store,
        confirm_handler,
    })
}

fn post_confirm(body: &str) -> Request<Body> {
    Request::post("/api/confirm")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn confirms_a_batch_and_lists_it_newest_first() {
    let app = make_app();
    let started_at = Utc::now();

    let response = app
        .clone()
        .oneshot(post_confirm(r#"{"names":["Ana","Beto"]}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "message": "Presence confirmed successfully!" })
    );

    let response = app
        .oneshot(Request::get("/api/attendees").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let listed = body_json(response).await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 2);

    let names: Vec<_> = listed
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"Ana"));
    assert!(names.contains(&"Beto"));

    let finished_at = Utc::now();
    let stamps: Vec<DateTime<Utc>> = listed
        .iter()
        .map(|r| r["confirmedAt"].as_str().unwrap().parse().unwrap())
        .collect();
    for (a, b) in stamps.iter().zip(stamps.iter().skip(1)) {
        assert!(a >= b, "listing must be sorted newest first");
    }
    for stamp in stamps {
        assert!(stamp >= started_at && stamp <= finished_at);
    }
}

#[tokio::test]
async fn drops_blank_names_and_stores_the_rest() {
    let app = make_app();

    let response = app
        .clone()
        .oneshot(post_confirm(r#"{"names":["Ana","","Beto"]}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(Request::get("/api/attendees").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let listed = body_json(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn rejects_an_all_blank_batch_without_storing_anything() {
    let app = make_app();

    let response = app
        .clone()
        .oneshot(post_confirm(r#"{"names":["","  "]}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "message": "Please provide at least one name." })
    );

    let response = app
        .oneshot(Request::get("/api/attendees").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn listing_is_idempotent_between_submissions() {
    let app = make_app();

    app.clone()
        .oneshot(post_confirm(r#"{"names":["Ana","Beto","Carla"]}"#))
        .await
        .unwrap();

    let first = body_json(
        app.clone()
            .oneshot(Request::get("/api/attendees").body(Body::empty()).unwrap())
            .await
            .unwrap(),
    )
    .await;
    let second = body_json(
        app.oneshot(Request::get("/api/attendees").body(Body::empty()).unwrap())
            .await
            .unwrap(),
    )
    .await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn unknown_routes_get_the_not_found_shape() {
    let response = make_app()
        .oneshot(Request::get("/api/party").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "message": "Not Found" })
    );
}
