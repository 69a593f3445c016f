use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::test_utils::TestContext;

#[tokio::test]
async fn test_update_timezone_requires_value() {
    let server = TestContext::new().server();

    let response = server
        .put("/api/availability/timezone")
        .json(&json!({ "timezone": "  " }))
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Timezone is required");
}

#[tokio::test]
async fn test_create_schedule_requires_name() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/availability/schedules")
        .json(&json!({ "name": "" }))
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Schedule name is required");
}

#[tokio::test]
async fn test_replace_windows_rejects_day_out_of_range() {
    let server = TestContext::new().server();

    let response = server
        .put(&format!("/api/availability/schedules/{}/slots", Uuid::new_v4()))
        .json(&json!([
            { "dayOfWeek": 1, "startTime": "09:00:00", "endTime": "17:00:00" },
            { "dayOfWeek": 7, "startTime": "09:00:00", "endTime": "17:00:00" },
        ]))
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "dayOfWeek must be between 0 (Sunday) and 6 (Saturday), got 7"
    );
}

#[tokio::test]
async fn test_create_override_rejects_inverted_range() {
    let server = TestContext::new().server();

    let response = server
        .post(&format!("/api/availability/schedules/{}/overrides", Uuid::new_v4()))
        .json(&json!({ "date": "2025-12-25", "startTime": "13:00:00", "endTime": "12:00:00" }))
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_window_rejects_inverted_range() {
    let server = TestContext::new().server();

    let response = server
        .put(&format!("/api/availability/{}", Uuid::new_v4()))
        .json(&json!({ "startTime": "17:00:00", "endTime": "09:00:00", "isEnabled": true }))
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_bulk_update_validates_every_entry() {
    let server = TestContext::new().server();

    let response = server
        .put("/api/availability")
        .json(&json!([
            {
                "id": Uuid::new_v4(),
                "startTime": "09:00:00",
                "endTime": "17:00:00",
                "isEnabled": true,
            },
            {
                "id": Uuid::new_v4(),
                "startTime": "10:00:00",
                "endTime": "10:00:00",
                "isEnabled": true,
            },
        ]))
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}
