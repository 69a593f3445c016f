use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::models::booking::Booking;

/// Whether a confirmed booking other than `excluding` already starts at
/// exactly `start_time` on `date`.
///
/// Only start times are compared. A 60 minute booking at 10:00 does not
/// conflict with a request for 10:15; this matches how [`generate_slots`]
/// hides booked candidates.
///
/// [`generate_slots`]: super::slots::generate_slots
pub fn has_conflict(
    date: NaiveDate,
    start_time: NaiveTime,
    bookings: &[Booking],
    excluding: Option<Uuid>,
) -> bool {
    bookings.iter().any(|booking| {
        booking.is_confirmed()
            && booking.date == date
            && booking.start_time == start_time
            && Some(booking.id) != excluding
    })
}
