use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use calin_core::{
    errors::CalError,
    models::{
        availability::{
            AvailabilityWindow, BulkAvailabilityUpdate, CreateDateOverrideRequest,
            CreateScheduleRequest, DateOverride, Schedule, ScheduleDetailResponse,
            UpdateAvailabilityRequest, UpdateScheduleRequest, WindowRequest, validate_time_range,
        },
        settings::{DEFAULT_TIMEZONE, TIMEZONE_KEY, TimezoneSetting},
    },
};
use calin_db::repositories::{availability, date_override, schedule, settings};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

fn schedule_not_found(id: Uuid) -> CalError {
    CalError::NotFound(format!("Schedule with ID {} not found", id))
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, CalError> {
    payload
        .map(|Json(inner)| inner)
        .map_err(|e| CalError::Validation(e.body_text()))
}

async fn require_schedule(pool: &PgPool, id: Uuid) -> Result<Schedule, CalError> {
    schedule::get_schedule_by_id(pool, id)
        .await
        .map_err(CalError::Database)?
        .map(Schedule::from)
        .ok_or_else(|| schedule_not_found(id))
}

async fn stored_timezone(pool: &PgPool) -> Result<String, CalError> {
    let timezone = settings::get_setting(pool, TIMEZONE_KEY)
        .await
        .map_err(CalError::Database)?
        .map(|setting| setting.value)
        .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string());

    Ok(timezone)
}

/// Weekly windows of the default schedule, ordered by day.
#[axum::debug_handler]
pub async fn get_availability(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<AvailabilityWindow>>, AppError> {
    let Some(default) = schedule::get_default_schedule(&state.db_pool)
        .await
        .map_err(CalError::Database)?
    else {
        return Ok(Json(Vec::new()));
    };

    let windows = availability::list_windows_by_schedule_id(&state.db_pool, default.id)
        .await
        .map_err(CalError::Database)?;

    Ok(Json(windows.into_iter().map(AvailabilityWindow::from).collect()))
}

#[axum::debug_handler]
pub async fn update_availability(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdateAvailabilityRequest>, JsonRejection>,
) -> Result<Json<AvailabilityWindow>, AppError> {
    let payload = body(payload)?;
    validate_time_range(payload.start_time, payload.end_time)?;

    let window = availability::update_window(
        &state.db_pool,
        id,
        payload.start_time,
        payload.end_time,
        payload.is_enabled,
    )
    .await
    .map_err(CalError::Database)?
    .ok_or_else(|| CalError::NotFound("Availability not found".to_string()))?;

    Ok(Json(window.into()))
}

/// Applies every update in the batch; ids that match no window are skipped.
#[axum::debug_handler]
pub async fn bulk_update_availability(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<Vec<BulkAvailabilityUpdate>>, JsonRejection>,
) -> Result<Json<Vec<AvailabilityWindow>>, AppError> {
    let updates = body(payload)?;
    for update in &updates {
        validate_time_range(update.start_time, update.end_time)?;
    }

    let updated = availability::update_windows(&state.db_pool, &updates)
        .await
        .map_err(CalError::Database)?;

    info!("Updated {} of {} availability windows", updated.len(), updates.len());
    Ok(Json(updated.into_iter().map(AvailabilityWindow::from).collect()))
}

#[axum::debug_handler]
pub async fn get_timezone(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<TimezoneSetting>, AppError> {
    let timezone = stored_timezone(&state.db_pool).await?;
    Ok(Json(TimezoneSetting { timezone }))
}

#[axum::debug_handler]
pub async fn update_timezone(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<TimezoneSetting>, JsonRejection>,
) -> Result<Json<TimezoneSetting>, AppError> {
    let payload = body(payload)?;
    let timezone = payload.timezone.trim();
    if timezone.is_empty() {
        return Err(CalError::Validation("Timezone is required".to_string()).into());
    }

    let setting = settings::upsert_setting(&state.db_pool, TIMEZONE_KEY, timezone)
        .await
        .map_err(CalError::Database)?;

    info!("Timezone set to {}", setting.value);
    Ok(Json(TimezoneSetting {
        timezone: setting.value,
    }))
}

#[axum::debug_handler]
pub async fn list_schedules(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Schedule>>, AppError> {
    let schedules = schedule::list_schedules(&state.db_pool)
        .await
        .map_err(CalError::Database)?;

    Ok(Json(schedules.into_iter().map(Schedule::from).collect()))
}

/// Creates a schedule seeded with the default working week.
///
/// Without an explicit `timeZone` the stored timezone setting is used.
#[axum::debug_handler]
pub async fn create_schedule(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<CreateScheduleRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Schedule>), AppError> {
    let payload = body(payload)?;
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(CalError::Validation("Schedule name is required".to_string()).into());
    }

    let timezone = match payload.time_zone.as_deref().map(str::trim) {
        Some(tz) if !tz.is_empty() => tz.to_string(),
        _ => stored_timezone(&state.db_pool).await?,
    };

    let created = schedule::create_schedule(&state.db_pool, name, &timezone, payload.is_default)
        .await
        .map_err(CalError::Database)?;

    info!("Created schedule {} ({})", created.name, created.id);
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[axum::debug_handler]
pub async fn get_schedule(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ScheduleDetailResponse>, AppError> {
    let schedule = require_schedule(&state.db_pool, id).await?;

    let availability = availability::list_windows_by_schedule_id(&state.db_pool, id)
        .await
        .map_err(CalError::Database)?;
    let overrides = date_override::list_overrides_by_schedule_id(&state.db_pool, id)
        .await
        .map_err(CalError::Database)?;

    Ok(Json(ScheduleDetailResponse {
        schedule,
        availability: availability.into_iter().map(AvailabilityWindow::from).collect(),
        overrides: overrides.into_iter().map(DateOverride::from).collect(),
    }))
}

#[axum::debug_handler]
pub async fn update_schedule(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdateScheduleRequest>, JsonRejection>,
) -> Result<Json<Schedule>, AppError> {
    let payload = body(payload)?;
    let name = payload.name.as_deref().map(str::trim);
    if name.is_some_and(str::is_empty) {
        return Err(CalError::Validation("Schedule name cannot be empty".to_string()).into());
    }
    let timezone = payload.time_zone.as_deref().map(str::trim);
    if timezone.is_some_and(str::is_empty) {
        return Err(CalError::Validation("Timezone cannot be empty".to_string()).into());
    }

    let updated = schedule::update_schedule(&state.db_pool, id, name, timezone, payload.is_default)
        .await
        .map_err(CalError::Database)?
        .ok_or_else(|| schedule_not_found(id))?;

    info!("Updated schedule {}", id);
    Ok(Json(updated.into()))
}

#[axum::debug_handler]
pub async fn delete_schedule(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let deleted = schedule::delete_schedule(&state.db_pool, id)
        .await
        .map_err(CalError::Database)?;

    if !deleted {
        return Err(schedule_not_found(id).into());
    }

    info!("Deleted schedule {}", id);
    Ok(StatusCode::NO_CONTENT)
}

/// Replaces all weekly windows of a schedule.
#[axum::debug_handler]
pub async fn replace_schedule_windows(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    payload: Result<Json<Vec<WindowRequest>>, JsonRejection>,
) -> Result<Json<Vec<AvailabilityWindow>>, AppError> {
    let windows = body(payload)?;
    for window in &windows {
        window.validate()?;
    }
    require_schedule(&state.db_pool, id).await?;

    let replaced = availability::replace_windows(&state.db_pool, id, &windows)
        .await
        .map_err(CalError::Database)?;

    info!("Replaced windows of schedule {} ({} windows)", id, replaced.len());
    Ok(Json(replaced.into_iter().map(AvailabilityWindow::from).collect()))
}

#[axum::debug_handler]
pub async fn create_date_override(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    payload: Result<Json<CreateDateOverrideRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<DateOverride>), AppError> {
    let payload = body(payload)?;
    payload.validate()?;
    require_schedule(&state.db_pool, id).await?;

    let created = date_override::create_override(
        &state.db_pool,
        id,
        payload.date,
        payload.start_time,
        payload.end_time,
        payload.is_enabled,
    )
    .await
    .map_err(CalError::Database)?;

    info!("Added override on {} to schedule {}", created.date, id);
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[axum::debug_handler]
pub async fn delete_date_override(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let deleted = date_override::delete_override(&state.db_pool, id)
        .await
        .map_err(CalError::Database)?;

    if !deleted {
        return Err(CalError::NotFound("Date override not found".to_string()).into());
    }

    Ok(StatusCode::NO_CONTENT)
}
