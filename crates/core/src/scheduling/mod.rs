//! Slot computation and booking conflict checks.

pub mod conflict;
pub mod slots;
pub mod store;
pub mod windows;

pub use conflict::has_conflict;
pub use slots::{booked_start_times, generate_slots};
pub use store::{SchedulingStore, can_book, compute_available_slots, ensure_can_book};
pub use windows::{resolve_windows, slots_for_windows};
