use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use calin_core::{
    errors::{CalError, SLOT_TAKEN_MESSAGE},
    models::booking::{
        AvailableSlotsQuery, AvailableSlotsResponse, Booking, BookingDetail, CreateBookingRequest,
        ListBookingsQuery, RescheduleBookingRequest,
    },
    scheduling::{compute_available_slots, ensure_can_book},
};
use calin_db::{
    is_unique_violation,
    repositories::{
        booking::{self, NewBooking},
        event_type,
    },
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

fn booking_not_found() -> CalError {
    CalError::NotFound("Booking not found".to_string())
}

/// A concurrent writer that won the partial unique index surfaces as a conflict.
fn map_write_error(err: eyre::Report) -> CalError {
    if is_unique_violation(&err) {
        CalError::SlotConflict(SLOT_TAKEN_MESSAGE.to_string())
    } else {
        CalError::Database(err)
    }
}

#[axum::debug_handler]
pub async fn list_bookings(
    State(state): State<Arc<ApiState>>,
    query: Result<Query<ListBookingsQuery>, QueryRejection>,
) -> Result<Json<Vec<BookingDetail>>, AppError> {
    let Query(query) = query.map_err(|e| CalError::Validation(e.body_text()))?;
    let today = Utc::now().date_naive();

    let bookings = booking::list_bookings(&state.db_pool, query.status, query.upcoming, today)
        .await
        .map_err(CalError::Database)?;

    let bookings = bookings
        .into_iter()
        .map(BookingDetail::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(bookings))
}

/// Start times still open for an event type on a date.
#[axum::debug_handler]
pub async fn available_slots(
    State(state): State<Arc<ApiState>>,
    query: Result<Query<AvailableSlotsQuery>, QueryRejection>,
) -> Result<Json<AvailableSlotsResponse>, AppError> {
    let Query(query) = query.map_err(|_| {
        CalError::Validation("Date and event type slug are required".to_string())
    })?;

    let response =
        compute_available_slots(state.store.as_ref(), query.date, &query.event_type_slug).await?;

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn get_booking(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<BookingDetail>, AppError> {
    let detail = booking::get_booking_detail(&state.db_pool, id)
        .await
        .map_err(CalError::Database)?
        .ok_or_else(booking_not_found)?;

    Ok(Json(detail.try_into()?))
}

#[axum::debug_handler]
pub async fn create_booking(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let Json(payload) =
        payload.map_err(|_| CalError::Validation("All fields are required".to_string()))?;
    payload.validate()?;

    // Conflicts are rejected before anything is written
    if let Err(err) = ensure_can_book(
        state.store.as_ref(),
        payload.date,
        payload.start_time,
        None,
    )
    .await
    {
        warn!(
            "Rejected booking on {} at {}: slot already taken",
            payload.date, payload.start_time
        );
        return Err(err.into());
    }

    event_type::get_event_type_by_id(&state.db_pool, payload.event_type_id)
        .await
        .map_err(CalError::Database)?
        .ok_or_else(|| CalError::NotFound("Event type not found".to_string()))?;

    let responses = payload
        .responses
        .clone()
        .unwrap_or_else(|| serde_json::json!({}));

    let created = booking::create_booking(
        &state.db_pool,
        &NewBooking {
            event_type_id: payload.event_type_id,
            booker_name: payload.booker_name.trim(),
            booker_email: payload.booker_email.trim(),
            date: payload.date,
            start_time: payload.start_time,
            end_time: payload.end_time,
            responses: &responses,
        },
    )
    .await
    .map_err(map_write_error)?;

    info!(
        "Created booking {} on {} at {}",
        created.id, created.date, created.start_time
    );
    Ok((StatusCode::CREATED, Json(created.try_into()?)))
}

#[axum::debug_handler]
pub async fn cancel_booking(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Booking>, AppError> {
    let cancelled = booking::cancel_booking(&state.db_pool, id)
        .await
        .map_err(CalError::Database)?
        .ok_or_else(booking_not_found)?;

    info!("Cancelled booking {}", id);
    Ok(Json(cancelled.try_into()?))
}

/// Moves a confirmed booking; its own current slot never counts as a conflict.
#[axum::debug_handler]
pub async fn reschedule_booking(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    payload: Result<Json<RescheduleBookingRequest>, JsonRejection>,
) -> Result<Json<Booking>, AppError> {
    let Json(payload) = payload.map_err(|_| {
        CalError::Validation("Date, start time, and end time are required".to_string())
    })?;
    payload.validate()?;

    let existing: Booking = booking::get_booking_by_id(&state.db_pool, id)
        .await
        .map_err(CalError::Database)?
        .ok_or_else(booking_not_found)?
        .try_into()?;

    if !existing.is_confirmed() {
        return Err(
            CalError::Validation("Cancelled bookings cannot be rescheduled".to_string()).into(),
        );
    }

    ensure_can_book(
        state.store.as_ref(),
        payload.date,
        payload.start_time,
        Some(id),
    )
    .await?;

    let rescheduled = booking::reschedule_booking(
        &state.db_pool,
        id,
        payload.date,
        payload.start_time,
        payload.end_time,
    )
    .await
    .map_err(map_write_error)?
    .ok_or_else(booking_not_found)?;

    info!(
        "Rescheduled booking {} to {} at {}",
        id, rescheduled.date, rescheduled.start_time
    );
    Ok(Json(rescheduled.try_into()?))
}
