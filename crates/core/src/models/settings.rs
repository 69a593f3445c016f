use serde::{Deserialize, Serialize};

pub const TIMEZONE_KEY: &str = "timezone";
pub const DEFAULT_TIMEZONE: &str = "UTC";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimezoneSetting {
    pub timezone: String,
}
