use chrono::{Days, NaiveTime, Utc};
use eyre::{eyre, Result};
use sqlx::{Pool, Postgres};
use tracing::info;

use calin_core::models::settings::TIMEZONE_KEY;

use crate::repositories::{
    booking::{self, NewBooking},
    event_type, schedule, settings,
};

const SEED_TIMEZONE: &str = "Asia/Kolkata";

/// Wipes every table and inserts the sample event types, schedule, setting
/// and bookings.
pub async fn seed_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Seeding database...");

    let tables = [
        "bookings",
        "date_overrides",
        "availability",
        "schedules",
        "event_types",
        "settings",
    ];
    for table in tables {
        sqlx::query(&format!("DELETE FROM {}", table))
            .execute(pool)
            .await?;
    }

    let quick = event_type::create_event_type(
        pool,
        "15 Minute Meeting",
        Some("A quick 15-minute introductory call to discuss your needs."),
        15,
        "15min",
    )
    .await?;
    let standard = event_type::create_event_type(
        pool,
        "30 Minute Meeting",
        Some("A standard 30-minute meeting for detailed discussions."),
        30,
        "30min",
    )
    .await?;
    let consultation = event_type::create_event_type(
        pool,
        "60 Minute Consultation",
        Some("An in-depth 60-minute consultation for comprehensive planning."),
        60,
        "60min",
    )
    .await?;
    info!("Created event types: 3");

    schedule::create_schedule(pool, "Working hours", SEED_TIMEZONE, true).await?;
    info!("Created default schedule");

    settings::upsert_setting(pool, TIMEZONE_KEY, SEED_TIMEZONE).await?;
    info!("Created settings");

    let today = Utc::now().date_naive();
    let tomorrow = today
        .checked_add_days(Days::new(1))
        .ok_or_else(|| eyre!("Date overflow computing tomorrow"))?;
    let day_after = today
        .checked_add_days(Days::new(2))
        .ok_or_else(|| eyre!("Date overflow computing the day after tomorrow"))?;
    let no_responses = serde_json::json!({});

    let samples = [
        (quick.id, "John Doe", "john@example.com", tomorrow, (10, 0), (10, 15)),
        (standard.id, "Jane Smith", "jane@example.com", tomorrow, (14, 0), (14, 30)),
        (consultation.id, "Bob Wilson", "bob@example.com", day_after, (11, 0), (12, 0)),
    ];
    for (event_type_id, name, email, date, (start_h, start_m), (end_h, end_m)) in samples {
        let start_time = NaiveTime::from_hms_opt(start_h, start_m, 0)
            .ok_or_else(|| eyre!("Invalid sample start time"))?;
        let end_time = NaiveTime::from_hms_opt(end_h, end_m, 0)
            .ok_or_else(|| eyre!("Invalid sample end time"))?;

        booking::create_booking(
            pool,
            &NewBooking {
                event_type_id,
                booker_name: name,
                booker_email: email,
                date,
                start_time,
                end_time,
                responses: &no_responses,
            },
        )
        .await?;
    }
    info!("Created sample bookings: {}", samples.len());

    info!("Seeding complete!");
    Ok(())
}
