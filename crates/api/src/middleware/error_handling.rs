//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the Cal.in API.
//! It maps domain errors to HTTP status codes and a JSON body of the form
//! `{"error": "<message>"}`.
//!
//! | Error | Status |
//! |-------|--------|
//! | `NotFound` | 404 |
//! | `Validation`, `InvalidDuration` | 400 |
//! | `SlotConflict` | 409 |
//! | `Database`, `Internal` | 500 |
//!
//! Server-side failures are logged and answered with a generic message so
//! driver details never reach the client.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use calin_core::errors::CalError;
use serde_json::json;
use tracing::error;

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps domain `CalError` instances and implements
/// `IntoResponse` to convert them into HTTP responses.
///
/// # Example
///
/// ```ignore
/// async fn handler(
///     State(state): State<Arc<ApiState>>,
///     Path(id): Path<Uuid>,
/// ) -> Result<Json<EventType>, AppError> {
///     let event_type = event_type::get_event_type_by_id(&state.db_pool, id)
///         .await
///         .map_err(CalError::Database)?
///         .ok_or_else(|| CalError::NotFound("Event type not found".to_string()))?;
///
///     Ok(Json(event_type.into()))
/// }
/// ```
#[derive(Debug)]
pub struct AppError(pub CalError);

impl AppError {
    /// Status code this error is answered with.
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            CalError::NotFound(_) => StatusCode::NOT_FOUND,
            CalError::Validation(_) => StatusCode::BAD_REQUEST,
            CalError::InvalidDuration(_) => StatusCode::BAD_REQUEST,
            CalError::SlotConflict(_) => StatusCode::CONFLICT,
            CalError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CalError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the JSON body.
    ///
    /// Client errors carry their own message without the variant prefix.
    pub fn message(&self) -> String {
        match &self.0 {
            CalError::NotFound(msg) | CalError::Validation(msg) | CalError::SlotConflict(msg) => {
                msg.clone()
            }
            CalError::InvalidDuration(_) => self.0.to_string(),
            CalError::Database(_) | CalError::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Converts application errors to HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {:?}", self.0);
        }

        let body = Json(json!({ "error": self.message() }));

        (status, body).into_response()
    }
}

/// Automatic conversion from CalError to AppError
///
/// This implementation allows using `?` operator with functions that return
/// `Result<T, CalError>` in handler functions that return `Result<T, AppError>`.
impl From<CalError> for AppError {
    fn from(err: CalError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError
///
/// Repository functions return `eyre::Result`; their failures surface as
/// `CalError::Database`.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(CalError::Database(err))
    }
}

/// Maps a CalError to an HTTP response
pub fn map_error(err: CalError) -> Response {
    AppError(err).into_response()
}
