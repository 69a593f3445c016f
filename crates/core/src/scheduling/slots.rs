//! # Slot generation
//!
//! Turns one availability window into the ordered list of bookable start
//! times for an event of a given duration.
//!
//! ## Algorithm
//!
//! 1. Place a cursor on the window start (hour and minute; seconds are dropped
//!    so every slot reads `HH:MM:00`).
//! 2. Compute the candidate end as `cursor + duration`. Minutes carry into
//!    hours and never wrap at midnight, so a candidate running past 23:59 is
//!    simply later than any window end.
//! 3. If the candidate end is strictly later than the window end (compared on
//!    hour and minute) stop: the overrunning candidate is dropped, not clipped.
//! 4. Otherwise emit the cursor unless it is one of the booked start times,
//!    then advance the cursor by the duration and repeat.
//!
//! Slots are anchored to the window's own start, not to clock boundaries, and
//! booked start times only suppress the exact candidate they equal. A booking
//! that starts between two candidates blocks nothing.

use std::collections::HashSet;

use chrono::{NaiveTime, Timelike};

use crate::{
    errors::{CalError, CalResult},
    models::booking::Booking,
};

const SECONDS_PER_MINUTE: u32 = 60;

/// Generates the bookable start times inside `[window_start, window_end]`.
///
/// Returns an empty list when the window is empty or inverted, and
/// [`CalError::InvalidDuration`] when `duration_minutes` is not positive.
///
/// # Example
///
/// ```
/// use std::collections::HashSet;
/// use chrono::NaiveTime;
/// use calin_core::scheduling::slots::generate_slots;
///
/// let start = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
/// let end = NaiveTime::from_hms_opt(9, 50, 0).unwrap();
/// let slots = generate_slots(start, end, 30, &HashSet::new()).unwrap();
/// assert_eq!(slots, vec![start]);
/// ```
pub fn generate_slots(
    window_start: NaiveTime,
    window_end: NaiveTime,
    duration_minutes: i32,
    booked_start_times: &HashSet<NaiveTime>,
) -> CalResult<Vec<NaiveTime>> {
    if duration_minutes <= 0 {
        return Err(CalError::InvalidDuration(duration_minutes));
    }

    let duration = duration_minutes as u32;
    let window_end = minute_of_day(window_end);
    let mut cursor = minute_of_day(window_start);
    let mut slots = Vec::new();

    loop {
        let slot_end = cursor + duration;
        if slot_end > window_end {
            break;
        }

        let slot_start = time_from_minute(cursor)?;
        if !booked_start_times.contains(&slot_start) {
            slots.push(slot_start);
        }

        cursor = slot_end;
    }

    Ok(slots)
}

/// Start times occupied by the confirmed bookings in `bookings`.
pub fn booked_start_times(bookings: &[Booking]) -> HashSet<NaiveTime> {
    bookings
        .iter()
        .filter(|booking| booking.is_confirmed())
        .map(|booking| booking.start_time)
        .collect()
}

fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

fn time_from_minute(minute: u32) -> CalResult<NaiveTime> {
    // Only reached for minutes below the window end, so always within one day.
    NaiveTime::from_num_seconds_from_midnight_opt(minute * SECONDS_PER_MINUTE, 0).ok_or_else(
        || CalError::Validation(format!("minute {} does not fall within a day", minute)),
    )
}
