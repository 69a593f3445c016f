use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use calin_core::{
    errors::CalError,
    models::event_type::{DeleteEventTypeResponse, EventType, EventTypeRequest},
};
use calin_db::{is_unique_violation, repositories::event_type};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

const DUPLICATE_SLUG_MESSAGE: &str = "Slug already exists";

fn not_found() -> CalError {
    CalError::NotFound("Event type not found".to_string())
}

/// Unique violations on `slug` are a client error, everything else a storage failure.
fn map_write_error(err: eyre::Report) -> CalError {
    if is_unique_violation(&err) {
        CalError::Validation(DUPLICATE_SLUG_MESSAGE.to_string())
    } else {
        CalError::Database(err)
    }
}

#[axum::debug_handler]
pub async fn list_event_types(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<EventType>>, AppError> {
    let event_types = event_type::list_event_types(&state.db_pool)
        .await
        .map_err(CalError::Database)?;

    Ok(Json(event_types.into_iter().map(EventType::from).collect()))
}

#[axum::debug_handler]
pub async fn get_event_type(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<EventType>, AppError> {
    let event_type = event_type::get_event_type_by_id(&state.db_pool, id)
        .await
        .map_err(CalError::Database)?
        .ok_or_else(not_found)?;

    Ok(Json(event_type.into()))
}

#[axum::debug_handler]
pub async fn get_event_type_by_slug(
    State(state): State<Arc<ApiState>>,
    Path(slug): Path<String>,
) -> Result<Json<EventType>, AppError> {
    let event_type = event_type::get_event_type_by_slug(&state.db_pool, &slug)
        .await
        .map_err(CalError::Database)?
        .ok_or_else(not_found)?;

    Ok(Json(event_type.into()))
}

#[axum::debug_handler]
pub async fn create_event_type(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<EventTypeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<EventType>), AppError> {
    let Json(payload) = payload.map_err(|e| CalError::Validation(e.body_text()))?;
    payload.validate()?;

    let created = event_type::create_event_type(
        &state.db_pool,
        payload.title.trim(),
        payload.description.as_deref(),
        payload.duration,
        payload.slug.trim(),
    )
    .await
    .map_err(map_write_error)?;

    info!("Created event type {} ({})", created.slug, created.id);
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[axum::debug_handler]
pub async fn update_event_type(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    payload: Result<Json<EventTypeRequest>, JsonRejection>,
) -> Result<Json<EventType>, AppError> {
    let Json(payload) = payload.map_err(|e| CalError::Validation(e.body_text()))?;
    payload.validate()?;

    let updated = event_type::update_event_type(
        &state.db_pool,
        id,
        payload.title.trim(),
        payload.description.as_deref(),
        payload.duration,
        payload.slug.trim(),
    )
    .await
    .map_err(map_write_error)?
    .ok_or_else(not_found)?;

    info!("Updated event type {}", id);
    Ok(Json(updated.into()))
}

#[axum::debug_handler]
pub async fn delete_event_type(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteEventTypeResponse>, AppError> {
    let deleted = event_type::delete_event_type(&state.db_pool, id)
        .await
        .map_err(CalError::Database)?;

    if !deleted {
        warn!("Delete requested for unknown event type {}", id);
        return Err(not_found().into());
    }

    info!("Deleted event type {}", id);
    Ok(Json(DeleteEventTypeResponse {
        message: "Event type deleted successfully".to_string(),
    }))
}
