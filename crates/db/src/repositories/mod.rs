pub mod availability;
pub mod booking;
pub mod date_override;
pub mod event_type;
pub mod schedule;
pub mod settings;
