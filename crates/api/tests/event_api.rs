//! End-to-end tests for the event board routes over the in-memory store.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, event_body, get, post_json, post_raw, submit_event};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: submission -> hidden -> authenticate -> visible
// ---------------------------------------------------------------------------

#[tokio::test]
async fn submitted_event_is_hidden_until_authenticated() {
    let app = build_test_app();
    let (id, code) = submit_event(&app, event_body("Test Event", "2025-01-01", "09:00")).await;

    // Hidden from listing and retrieval.
    let json = body_json(get(app.router.clone(), "/api/v1/event/all").await).await;
    assert_eq!(json["data"], json!([]));
    let response = get(app.router.clone(), &format!("/api/v1/event/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Authenticate via the moderation link.
    let response = get(
        app.router.clone(),
        &format!("/api/v1/event/update/{id}?auth_code={code}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["message"], "Event authenticated successfully");

    // Now visible.
    let response = get(app.router.clone(), &format!("/api/v1/event/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let event = &json["data"];
    assert_eq!(event["id"], id);
    assert_eq!(event["title"], "Test Event");
    assert_eq!(event["startDate"], "2025-01-01");
    assert_eq!(event["startTime"], "09:00:00");
    assert_eq!(event["isOnline"], true);
    assert_eq!(event["isAuthenticated"], true);
    assert_eq!(event["tags"], json!(["rust", "東京"]));
    assert_eq!(event["speakers"][0]["organization"], "AE");
    assert_eq!(event["schedule"][0]["speaker"], "Ada");
    // Blank optional strings are stored as null.
    assert!(event["venue"].is_null());

    let json = body_json(get(app.router.clone(), "/api/v1/event/all").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Test: the auth code never appears in responses
// ---------------------------------------------------------------------------

#[tokio::test]
async fn auth_code_is_never_serialized() {
    let app = build_test_app();
    let (id, code) = submit_event(&app, event_body("Secret", "2025-01-01", "09:00")).await;
    get(
        app.router.clone(),
        &format!("/api/v1/event/update/{id}?auth_code={code}"),
    )
    .await;

    let one = body_json(get(app.router.clone(), &format!("/api/v1/event/{id}")).await).await;
    let all = body_json(get(app.router.clone(), "/api/v1/event/all").await).await;

    for json in [one, all] {
        let text = json.to_string();
        assert!(!text.contains(&code));
        assert!(!text.contains("authCode"));
        assert!(!text.contains("auth_code"));
    }
}

// ---------------------------------------------------------------------------
// Test: wrong auth code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn wrong_auth_code_returns_400_and_keeps_event_hidden() {
    let app = build_test_app();
    let (id, _code) = submit_event(&app, event_body("Test Event", "2025-01-01", "09:00")).await;

    let response = get(
        app.router.clone(),
        &format!("/api/v1/event/update/{id}?auth_code=not-the-code"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "AUTHENTICATION_FAILED");

    let response = get(app.router.clone(), &format!("/api/v1/event/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_id_authentication_returns_400() {
    let app = build_test_app();
    let response = get(
        app.router.clone(),
        "/api/v1/event/update/424242?auth_code=whatever",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_auth_code_returns_400() {
    let app = build_test_app();
    let (id, _code) = submit_event(&app, event_body("Test Event", "2025-01-01", "09:00")).await;

    let response = get(app.router.clone(), &format!("/api/v1/event/update/{id}")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Test: authentication is idempotent
// ---------------------------------------------------------------------------

#[tokio::test]
async fn repeated_authentication_succeeds() {
    let app = build_test_app();
    let (id, code) = submit_event(&app, event_body("Twice", "2025-01-01", "09:00")).await;
    let uri = format!("/api/v1/event/update/{id}?auth_code={code}");

    assert_eq!(get(app.router.clone(), &uri).await.status(), StatusCode::OK);
    let first = body_json(get(app.router.clone(), &format!("/api/v1/event/{id}")).await).await;

    assert_eq!(get(app.router.clone(), &uri).await.status(), StatusCode::OK);
    let second = body_json(get(app.router.clone(), &format!("/api/v1/event/{id}")).await).await;

    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// Test: delivery failure aborts the creation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delivery_failure_returns_500_and_stores_nothing() {
    let app = build_test_app();
    app.gateway.fail(true);

    let response = post_json(
        app.router.clone(),
        "/api/v1/event/new",
        event_body("Test Event", "2025-01-01", "09:00"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "DELIVERY_FAILED");
    assert_eq!(app.store.count_matching("Test Event", "Rust Tokyo").await, 0);

    let json = body_json(get(app.router.clone(), "/api/v1/event/all").await).await;
    assert_eq!(json["data"], json!([]));
}

// ---------------------------------------------------------------------------
// Test: store failures are sanitized 500s
// ---------------------------------------------------------------------------

#[tokio::test]
async fn store_failure_returns_sanitized_500() {
    let app = build_test_app();
    app.store.fail_begin(true);

    let response = post_json(
        app.router.clone(),
        "/api/v1/event/new",
        event_body("Test Event", "2025-01-01", "09:00"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
    assert!(app.gateway.sent().await.is_empty());
}

// ---------------------------------------------------------------------------
// Test: validation happens before the store or gateway is touched
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_submission_returns_400_without_side_effects() {
    let app = build_test_app();

    let mut body = event_body("Bad Date", "2025-13-45", "09:00");
    let response = post_json(app.router.clone(), "/api/v1/event/new", body.clone()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    body["startDate"] = json!("2025-01-01");
    body["email"] = json!("not-an-email");
    let response = post_json(app.router.clone(), "/api/v1/event/new", body.clone()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    body["email"] = json!("ok@example.com");
    body["title"] = json!("");
    let response = post_json(app.router.clone(), "/api/v1/event/new", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(app.store.row_count().await, 0);
    assert!(app.gateway.sent().await.is_empty());
}

#[tokio::test]
async fn malformed_json_returns_400() {
    let app = build_test_app();
    let response = post_raw(
        app.router.clone(),
        "/api/v1/event/new",
        "{\"title\": ".to_string(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn null_collections_are_accepted_as_empty() {
    let app = build_test_app();
    let mut body = event_body("No Lists", "2025-01-01", "09:00");
    body["tags"] = json!(null);
    body["speakers"] = json!(null);
    body.as_object_mut().unwrap().remove("schedule");

    let (id, code) = submit_event(&app, body).await;
    get(
        app.router.clone(),
        &format!("/api/v1/event/update/{id}?auth_code={code}"),
    )
    .await;

    let json = body_json(get(app.router.clone(), &format!("/api/v1/event/{id}")).await).await;
    let event = &json["data"];
    assert_eq!(event["tags"], json!([]));
    assert_eq!(event["speakers"], json!([]));
    assert_eq!(event["schedule"], json!([]));
}

// ---------------------------------------------------------------------------
// Test: listing order
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_is_ordered_by_start_date_then_time() {
    let app = build_test_app();
    let submissions = [
        ("late", "2025-02-01", "09:00"),
        ("second", "2025-01-01", "10:00"),
        ("first", "2025-01-01", "09:00"),
    ];
    for (title, date, time) in submissions {
        let (id, code) = submit_event(&app, event_body(title, date, time)).await;
        get(
            app.router.clone(),
            &format!("/api/v1/event/update/{id}?auth_code={code}"),
        )
        .await;
    }

    let json = body_json(get(app.router.clone(), "/api/v1/event/all").await).await;
    let titles: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["first", "second", "late"]);
}

// ---------------------------------------------------------------------------
// Test: non-numeric id
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_numeric_id_returns_400() {
    let app = build_test_app();
    let response = get(app.router.clone(), "/api/v1/event/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: contact form
// ---------------------------------------------------------------------------

#[tokio::test]
async fn contact_is_relayed_to_moderators() {
    let app = build_test_app();
    let response = post_json(
        app.router.clone(),
        "/api/v1/contact",
        json!({
            "name": "Hanako",
            "email": "hanako@example.com",
            "message": "Hello there"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"], "ok");

    let sent = app.gateway.sent().await;
    assert_eq!(sent.len(), 1);
    assert!(sent[0].contains("Hello there"));
}

#[tokio::test]
async fn invalid_contact_returns_400() {
    let app = build_test_app();
    let response = post_json(
        app.router.clone(),
        "/api/v1/contact",
        json!({ "name": "", "email": "x@example.com", "message": "hi" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(app.gateway.sent().await.is_empty());
}

#[tokio::test]
async fn contact_delivery_failure_returns_500() {
    let app = build_test_app();
    app.gateway.fail(true);
    let response = post_json(
        app.router.clone(),
        "/api/v1/contact",
        json!({ "name": "A", "email": "a@example.com", "message": "hi" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["code"], "DELIVERY_FAILED");
}
