#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use eventboard_api::config::ServerConfig;
use eventboard_api::router::build_app_router;
use eventboard_api::state::AppState;
use eventboard_db::MemoryEventStore;
use eventboard_notify::RecordingGateway;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        public_api_url: "http://api.test/api/v1".to_string(),
        db_max_connections: 1,
    }
}

/// Handles into the in-memory backends behind a test app.
pub struct TestApp {
    pub router: Router,
    pub store: MemoryEventStore,
    pub gateway: RecordingGateway,
}

/// Build the full application router over an in-memory store and a
/// recording gateway, with the same middleware stack as production.
pub fn build_test_app() -> TestApp {
    let store = MemoryEventStore::new();
    let gateway = RecordingGateway::new();
    let state = AppState::new(
        Arc::new(store.clone()),
        Arc::new(gateway.clone()),
        test_config(),
    );
    TestApp {
        router: build_app_router(state).unwrap(),
        store,
        gateway,
    }
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

/// Send a POST request with an arbitrary body labelled as JSON.
pub async fn post_raw(app: Router, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A complete, valid event submission in the frontend's wire format.
pub fn event_body(title: &str, start_date: &str, start_time: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "organizer": "Rust Tokyo",
        "startDate": start_date,
        "startTime": start_time,
        "endDate": start_date,
        "endTime": "18:00",
        "email": "organizer@example.com",
        "prefecture": "Tokyo",
        "eventType": "meetup",
        "isOnline": true,
        "isOffline": false,
        "officialUrl": "https://example.com/event",
        "onlineLectureUrl": null,
        "venue": "",
        "target": "Everyone",
        "capacity": "50",
        "description": "Monthly meetup",
        "tags": ["rust", "東京"],
        "speakers": [
            { "name": "Ada", "title": "Keynote", "organization": "AE" }
        ],
        "schedule": [
            { "time": "10:00", "title": "Opening", "speaker": "Ada" }
        ]
    })
}

/// Pull the auth code out of a moderation message.
pub fn auth_code_from(message: &str) -> String {
    let start = message.find("auth_code=").unwrap() + "auth_code=".len();
    message[start..]
        .split_whitespace()
        .next()
        .unwrap()
        .to_string()
}

/// Submit an event through the API and return its id and auth code.
pub async fn submit_event(app: &TestApp, body: serde_json::Value) -> (i64, String) {
    let response = post_json(app.router.clone(), "/api/v1/event/new", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();
    let sent = app.gateway.sent().await;
    let message = sent
        .iter()
        .find(|m| m.contains(&format!("/event/update/{id}?")))
        .unwrap();
    (id, auth_code_from(message))
}
