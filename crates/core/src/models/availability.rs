use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{CalError, CalResult};

/// A named set of weekly windows and date overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: Uuid,
    pub name: String,
    /// Display only; slot arithmetic works on naive wall-clock times.
    pub time_zone: String,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
}

/// Recurring weekly window. `day_of_week` counts from Sunday = 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityWindow {
    pub id: Uuid,
    pub schedule_id: Uuid,
    pub day_of_week: i32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_enabled: bool,
}

/// Replaces every weekly window of its schedule on `date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateOverride {
    pub id: Uuid,
    pub schedule_id: Uuid,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_enabled: bool,
}

/// An enabled time range resolved for one concrete date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeWindow {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl TimeWindow {
    pub fn new(start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            start_time,
            end_time,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAvailabilityRequest {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkAvailabilityUpdate {
    pub id: Uuid,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowRequest {
    pub day_of_week: i32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    #[serde(default = "enabled_by_default")]
    pub is_enabled: bool,
}

impl WindowRequest {
    pub fn validate(&self) -> CalResult<()> {
        validate_day_of_week(self.day_of_week)?;
        validate_time_range(self.start_time, self.end_time)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleRequest {
    pub name: String,
    pub time_zone: Option<String>,
    #[serde(default)]
    pub is_default: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScheduleRequest {
    pub name: Option<String>,
    pub time_zone: Option<String>,
    pub is_default: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDetailResponse {
    #[serde(flatten)]
    pub schedule: Schedule,
    pub availability: Vec<AvailabilityWindow>,
    pub overrides: Vec<DateOverride>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDateOverrideRequest {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    #[serde(default = "enabled_by_default")]
    pub is_enabled: bool,
}

impl CreateDateOverrideRequest {
    pub fn validate(&self) -> CalResult<()> {
        validate_time_range(self.start_time, self.end_time)
    }
}

fn enabled_by_default() -> bool {
    true
}

pub fn validate_day_of_week(day_of_week: i32) -> CalResult<()> {
    if !(0..=6).contains(&day_of_week) {
        return Err(CalError::Validation(format!(
            "dayOfWeek must be between 0 (Sunday) and 6 (Saturday), got {}",
            day_of_week
        )));
    }
    Ok(())
}

pub fn validate_time_range(start_time: NaiveTime, end_time: NaiveTime) -> CalResult<()> {
    if end_time <= start_time {
        return Err(CalError::Validation(format!(
            "endTime {} must be later than startTime {}",
            end_time, start_time
        )));
    }
    Ok(())
}
