use axum::http::StatusCode;
use calin_core::{
    errors::SLOT_TAKEN_MESSAGE,
    models::{availability::TimeWindow, booking::AvailableSlotsResponse},
};
use fake::{
    Fake,
    faker::{internet::en::SafeEmail, name::en::Name},
};
use mockall::predicate;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::test_utils::{TestContext, confirmed_booking, event_type, t, tuesday};

#[test_log::test(tokio::test)]
async fn test_available_slots_skip_booked_start_times() {
    let mut ctx = TestContext::new();
    let meeting = event_type("30min", 30);
    let returned = meeting.clone();

    ctx.store
        .expect_event_type_by_slug()
        .times(1)
        .returning(move |_| Ok(Some(returned.clone())));
    ctx.store
        .expect_enabled_windows_for_date()
        .with(predicate::eq(tuesday()))
        .times(1)
        .returning(|_| Ok(vec![TimeWindow::new(t(9, 0), t(12, 0))]));
    ctx.store
        .expect_confirmed_bookings_for_date()
        .with(predicate::eq(tuesday()))
        .times(1)
        .returning(|date| Ok(vec![confirmed_booking(date, t(10, 0), t(10, 30))]));

    let server = ctx.server();
    let response = server
        .get("/api/bookings/available-slots")
        .add_query_param("date", "2025-06-10")
        .add_query_param("eventTypeSlug", "30min")
        .await;

    response.assert_status_ok();
    let body: AvailableSlotsResponse = response.json();
    assert_eq!(
        body.slots,
        vec![t(9, 0), t(9, 30), t(10, 30), t(11, 0), t(11, 30)]
    );
    assert_eq!(body.event_type, meeting);
}

#[tokio::test]
async fn test_available_slots_serialize_as_time_strings() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_event_type_by_slug()
        .returning(|_| Ok(Some(event_type("60min", 60))));
    ctx.store
        .expect_enabled_windows_for_date()
        .returning(|_| Ok(vec![TimeWindow::new(t(9, 0), t(11, 0))]));
    ctx.store
        .expect_confirmed_bookings_for_date()
        .returning(|_| Ok(Vec::new()));

    let server = ctx.server();
    let response = server
        .get("/api/bookings/available-slots")
        .add_query_param("date", "2025-06-10")
        .add_query_param("eventTypeSlug", "60min")
        .await;

    let body: Value = response.json();
    assert_eq!(body["slots"], json!(["09:00:00", "10:00:00"]));
    assert_eq!(body["eventType"]["slug"], "60min");
}

#[tokio::test]
async fn test_available_slots_empty_without_windows() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_event_type_by_slug()
        .returning(|_| Ok(Some(event_type("15min", 15))));
    ctx.store
        .expect_enabled_windows_for_date()
        .returning(|_| Ok(Vec::new()));
    ctx.store.expect_confirmed_bookings_for_date().times(0);

    let server = ctx.server();
    let response = server
        .get("/api/bookings/available-slots")
        .add_query_param("date", "2025-06-15")
        .add_query_param("eventTypeSlug", "15min")
        .await;

    response.assert_status_ok();
    let body: AvailableSlotsResponse = response.json();
    assert!(body.slots.is_empty());
}

#[tokio::test]
async fn test_available_slots_unknown_slug() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_event_type_by_slug()
        .times(1)
        .returning(|_| Ok(None));
    ctx.store.expect_enabled_windows_for_date().times(0);

    let server = ctx.server();
    let response = server
        .get("/api/bookings/available-slots")
        .add_query_param("date", "2025-06-10")
        .add_query_param("eventTypeSlug", "missing")
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "Event type not found");
}

#[tokio::test]
async fn test_available_slots_require_date_and_slug() {
    let server = TestContext::new().server();

    let response = server
        .get("/api/bookings/available-slots")
        .add_query_param("date", "2025-06-10")
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Date and event type slug are required");
}

#[test_log::test(tokio::test)]
async fn test_create_booking_rejects_taken_start_time() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_confirmed_bookings_for_date()
        .with(predicate::eq(tuesday()))
        .times(1)
        .returning(|date| Ok(vec![confirmed_booking(date, t(10, 0), t(10, 30))]));

    let name: String = Name().fake();
    let email: String = SafeEmail().fake();

    let server = ctx.server();
    let response = server
        .post("/api/bookings")
        .json(&json!({
            "eventTypeId": Uuid::new_v4(),
            "bookerName": name,
            "bookerEmail": email,
            "date": "2025-06-10",
            "startTime": "10:00:00",
            "endTime": "10:30:00",
        }))
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["error"], SLOT_TAKEN_MESSAGE);
}

#[tokio::test]
async fn test_create_booking_requires_booker_details() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/bookings")
        .json(&json!({
            "eventTypeId": Uuid::new_v4(),
            "bookerName": "  ",
            "bookerEmail": "jane@example.com",
            "date": "2025-06-10",
            "startTime": "10:00:00",
            "endTime": "10:30:00",
        }))
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "All fields are required");
}

#[tokio::test]
async fn test_create_booking_with_missing_fields() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/bookings")
        .json(&json!({
            "bookerName": "Jane Smith",
            "date": "2025-06-10",
        }))
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "All fields are required");
}

#[tokio::test]
async fn test_create_booking_rejects_end_before_start() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/bookings")
        .json(&json!({
            "eventTypeId": Uuid::new_v4(),
            "bookerName": "Jane Smith",
            "bookerEmail": "jane@example.com",
            "date": "2025-06-10",
            "startTime": "10:30:00",
            "endTime": "10:00:00",
        }))
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_reschedule_requires_date_and_times() {
    let server = TestContext::new().server();

    let response = server
        .put(&format!("/api/bookings/{}", Uuid::new_v4()))
        .json(&json!({ "date": "2025-06-10" }))
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Date, start time, and end time are required");
}

#[tokio::test]
async fn test_list_bookings_rejects_unknown_status() {
    let server = TestContext::new().server();

    let response = server
        .get("/api/bookings")
        .add_query_param("status", "pending")
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}
