use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

use crate::test_utils::TestContext;

#[rstest]
#[case(
    json!({ "title": "", "duration": 30, "slug": "30min" }),
    "Title, duration, and slug are required"
)]
#[case(
    json!({ "title": "Call", "duration": 30, "slug": " " }),
    "Title, duration, and slug are required"
)]
#[case(
    json!({ "title": "Call", "duration": 0, "slug": "call" }),
    "Invalid duration: 0 minutes (must be greater than zero)"
)]
#[case(
    json!({ "title": "Call", "duration": -15, "slug": "call" }),
    "Invalid duration: -15 minutes (must be greater than zero)"
)]
#[tokio::test]
async fn test_create_event_type_validation(#[case] payload: Value, #[case] message: &str) {
    let server = TestContext::new().server();

    let response = server
        .post("/api/event-types")
        .json(&payload)
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], message);
}

#[tokio::test]
async fn test_update_event_type_validation() {
    let server = TestContext::new().server();

    let response = server
        .put(&format!("/api/event-types/{}", uuid::Uuid::new_v4()))
        .json(&json!({ "title": "Call", "duration": 0, "slug": "call" }))
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_event_type_malformed_body() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/event-types")
        .json(&json!({ "title": "Call" }))
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].is_string());
}
