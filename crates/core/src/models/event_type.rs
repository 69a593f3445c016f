use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{CalError, CalResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventType {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    /// Length of one bookable slot, in minutes.
    pub duration: i32,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of both `POST /api/event-types` and `PUT /api/event-types/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTypeRequest {
    pub title: String,
    pub description: Option<String>,
    pub duration: i32,
    pub slug: String,
}

impl EventTypeRequest {
    pub fn validate(&self) -> CalResult<()> {
        if self.title.trim().is_empty() || self.slug.trim().is_empty() {
            return Err(CalError::Validation(
                "Title, duration, and slug are required".to_string(),
            ));
        }
        if self.duration <= 0 {
            return Err(CalError::InvalidDuration(self.duration));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteEventTypeResponse {
    pub message: String,
}
