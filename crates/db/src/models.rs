use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use calin_core::{
    errors::CalError,
    models::{
        availability::{AvailabilityWindow, DateOverride, Schedule},
        booking::{Booking, BookingDetail},
        event_type::EventType,
    },
};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbEventType {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub duration: i32,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSchedule {
    pub id: Uuid,
    pub name: String,
    pub timezone: String,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAvailability {
    pub id: Uuid,
    pub schedule_id: Uuid,
    pub day_of_week: i32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbDateOverride {
    pub id: Uuid,
    pub schedule_id: Uuid,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: Uuid,
    pub event_type_id: Uuid,
    pub booker_name: String,
    pub booker_email: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: String,
    pub responses: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// A booking row left-joined with its event type.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBookingDetail {
    #[sqlx(flatten)]
    pub booking: DbBooking,
    pub event_title: Option<String>,
    pub event_duration: Option<i32>,
    pub event_description: Option<String>,
    pub event_slug: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSetting {
    pub id: Uuid,
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

impl From<DbEventType> for EventType {
    fn from(row: DbEventType) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            duration: row.duration,
            slug: row.slug,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<DbSchedule> for Schedule {
    fn from(row: DbSchedule) -> Self {
        Self {
            id: row.id,
            name: row.name,
            time_zone: row.timezone,
            is_default: row.is_default,
            created_at: row.created_at,
        }
    }
}

impl From<DbAvailability> for AvailabilityWindow {
    fn from(row: DbAvailability) -> Self {
        Self {
            id: row.id,
            schedule_id: row.schedule_id,
            day_of_week: row.day_of_week,
            start_time: row.start_time,
            end_time: row.end_time,
            is_enabled: row.is_enabled,
        }
    }
}

impl From<DbDateOverride> for DateOverride {
    fn from(row: DbDateOverride) -> Self {
        Self {
            id: row.id,
            schedule_id: row.schedule_id,
            date: row.date,
            start_time: row.start_time,
            end_time: row.end_time,
            is_enabled: row.is_enabled,
        }
    }
}

impl TryFrom<DbBooking> for Booking {
    type Error = CalError;

    fn try_from(row: DbBooking) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            event_type_id: row.event_type_id,
            booker_name: row.booker_name,
            booker_email: row.booker_email,
            date: row.date,
            start_time: row.start_time,
            end_time: row.end_time,
            status: row.status.parse()?,
            responses: row.responses,
            created_at: row.created_at,
        })
    }
}

impl TryFrom<DbBookingDetail> for BookingDetail {
    type Error = CalError;

    fn try_from(row: DbBookingDetail) -> Result<Self, Self::Error> {
        Ok(Self {
            booking: row.booking.try_into()?,
            event_title: row.event_title,
            event_duration: row.event_duration,
            event_description: row.event_description,
            event_slug: row.event_slug,
        })
    }
}
