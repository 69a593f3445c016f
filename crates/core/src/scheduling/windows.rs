use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::{
    errors::CalResult,
    models::availability::{AvailabilityWindow, DateOverride, TimeWindow},
};

use super::slots::generate_slots;

/// Resolves the enabled windows for `date`.
///
/// Any override dated `date` replaces the weekly windows outright; a day with
/// only disabled overrides is closed. Without overrides the enabled weekly
/// windows for the date's weekday (Sunday = 0) apply. Both are returned in
/// start-time order.
pub fn resolve_windows(
    date: NaiveDate,
    weekly: &[AvailabilityWindow],
    overrides: &[DateOverride],
) -> Vec<TimeWindow> {
    let for_date: Vec<&DateOverride> = overrides.iter().filter(|o| o.date == date).collect();

    let mut windows: Vec<TimeWindow> = if for_date.is_empty() {
        let day_of_week = day_of_week(date);
        weekly
            .iter()
            .filter(|w| w.is_enabled && w.day_of_week == day_of_week)
            .map(|w| TimeWindow::new(w.start_time, w.end_time))
            .collect()
    } else {
        for_date
            .into_iter()
            .filter(|o| o.is_enabled)
            .map(|o| TimeWindow::new(o.start_time, o.end_time))
            .collect()
    };

    windows.sort_by_key(|w| w.start_time);
    windows
}

/// Runs the generator once per window and concatenates the results in window
/// order.
pub fn slots_for_windows(
    windows: &[TimeWindow],
    duration_minutes: i32,
    booked_start_times: &HashSet<NaiveTime>,
) -> CalResult<Vec<NaiveTime>> {
    let mut slots = Vec::new();
    for window in windows {
        slots.extend(generate_slots(
            window.start_time,
            window.end_time,
            duration_minutes,
            booked_start_times,
        )?);
    }
    Ok(slots)
}

pub fn day_of_week(date: NaiveDate) -> i32 {
    date.weekday().num_days_from_sunday() as i32
}
