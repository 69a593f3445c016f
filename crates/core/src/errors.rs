use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid duration: {0} minutes (must be greater than zero)")]
    InvalidDuration(i32),

    #[error("Slot conflict: {0}")]
    SlotConflict(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type CalResult<T> = Result<T, CalError>;

/// Message surfaced to a booker whose requested start time is taken.
pub const SLOT_TAKEN_MESSAGE: &str = "This time slot is already booked";
