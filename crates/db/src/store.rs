use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::debug;

use calin_core::{
    errors::CalResult,
    models::{
        availability::{AvailabilityWindow, DateOverride, TimeWindow},
        booking::Booking,
        event_type::EventType,
    },
    scheduling::{SchedulingStore, resolve_windows},
};

use crate::{
    DbPool,
    repositories::{availability, booking, date_override, event_type, schedule},
};

/// [`SchedulingStore`] backed by PostgreSQL. Windows come from the default
/// schedule.
#[derive(Debug, Clone)]
pub struct PgSchedulingStore {
    pool: DbPool,
}

impl PgSchedulingStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SchedulingStore for PgSchedulingStore {
    async fn event_type_by_slug(&self, slug: &str) -> CalResult<Option<EventType>> {
        let event_type = event_type::get_event_type_by_slug(&self.pool, slug).await?;
        Ok(event_type.map(EventType::from))
    }

    async fn enabled_windows_for_date(&self, date: NaiveDate) -> CalResult<Vec<TimeWindow>> {
        let Some(default_schedule) = schedule::get_default_schedule(&self.pool).await? else {
            debug!("No schedule configured; {} has no availability", date);
            return Ok(Vec::new());
        };

        let weekly: Vec<AvailabilityWindow> =
            availability::list_windows_by_schedule_id(&self.pool, default_schedule.id)
                .await?
                .into_iter()
                .map(Into::into)
                .collect();
        let overrides: Vec<DateOverride> =
            date_override::get_overrides_for_date(&self.pool, default_schedule.id, date)
                .await?
                .into_iter()
                .map(Into::into)
                .collect();

        Ok(resolve_windows(date, &weekly, &overrides))
    }

    async fn confirmed_bookings_for_date(&self, date: NaiveDate) -> CalResult<Vec<Booking>> {
        booking::get_confirmed_bookings_by_date(&self.pool, date)
            .await?
            .into_iter()
            .map(Booking::try_from)
            .collect()
    }
}
