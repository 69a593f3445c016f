use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use tracing::debug;
use uuid::Uuid;

use crate::{
    errors::{CalError, CalResult, SLOT_TAKEN_MESSAGE},
    models::{
        availability::TimeWindow,
        booking::{AvailableSlotsResponse, Booking},
        event_type::EventType,
    },
};

use super::{conflict::has_conflict, slots::booked_start_times, windows::slots_for_windows};

/// Storage collaborator consumed by the scheduling functions.
///
/// Implementations decide which schedule applies and how date overrides are
/// stored; callers only see resolved windows and confirmed bookings.
#[async_trait]
pub trait SchedulingStore: Send + Sync {
    async fn event_type_by_slug(&self, slug: &str) -> CalResult<Option<EventType>>;

    /// Enabled windows for `date`, overrides already applied, in start order.
    async fn enabled_windows_for_date(&self, date: NaiveDate) -> CalResult<Vec<TimeWindow>>;

    async fn confirmed_bookings_for_date(&self, date: NaiveDate) -> CalResult<Vec<Booking>>;
}

/// Bookable start times for `event_type_slug` on `date`.
///
/// A date without enabled windows yields an empty list rather than an error.
pub async fn compute_available_slots<S>(
    store: &S,
    date: NaiveDate,
    event_type_slug: &str,
) -> CalResult<AvailableSlotsResponse>
where
    S: SchedulingStore + ?Sized,
{
    let event_type = store
        .event_type_by_slug(event_type_slug)
        .await?
        .ok_or_else(|| CalError::NotFound("Event type not found".to_string()))?;

    let windows = store.enabled_windows_for_date(date).await?;
    if windows.is_empty() {
        debug!("No enabled availability on {}", date);
        return Ok(AvailableSlotsResponse {
            slots: Vec::new(),
            event_type,
        });
    }

    let bookings = store.confirmed_bookings_for_date(date).await?;
    let booked = booked_start_times(&bookings);
    let slots = slots_for_windows(&windows, event_type.duration, &booked)?;

    debug!(
        "Computed {} slots for {} on {} across {} windows",
        slots.len(),
        event_type.slug,
        date,
        windows.len()
    );

    Ok(AvailableSlotsResponse { slots, event_type })
}

pub async fn can_book<S>(
    store: &S,
    date: NaiveDate,
    start_time: NaiveTime,
    excluding: Option<Uuid>,
) -> CalResult<bool>
where
    S: SchedulingStore + ?Sized,
{
    let bookings = store.confirmed_bookings_for_date(date).await?;
    Ok(!has_conflict(date, start_time, &bookings, excluding))
}

/// Like [`can_book`], but reports a taken start time as
/// [`CalError::SlotConflict`].
pub async fn ensure_can_book<S>(
    store: &S,
    date: NaiveDate,
    start_time: NaiveTime,
    excluding: Option<Uuid>,
) -> CalResult<()>
where
    S: SchedulingStore + ?Sized,
{
    if can_book(store, date, start_time, excluding).await? {
        Ok(())
    } else {
        Err(CalError::SlotConflict(SLOT_TAKEN_MESSAGE.to_string()))
    }
}
