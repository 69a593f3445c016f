use crate::models::{DbBooking, DbBookingDetail};
use calin_core::models::booking::BookingStatus;
use chrono::{NaiveDate, NaiveTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Fields of a booking supplied by the booker.
#[derive(Debug, Clone)]
pub struct NewBooking<'a> {
    pub event_type_id: Uuid,
    pub booker_name: &'a str,
    pub booker_email: &'a str,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub responses: &'a serde_json::Value,
}

/// Lists bookings joined with their event types, ordered by date then start.
///
/// `upcoming = Some(true)` keeps dates on or after `today`, `Some(false)` keeps
/// dates on or before it.
pub async fn list_bookings(
    pool: &Pool<Postgres>,
    status: Option<BookingStatus>,
    upcoming: Option<bool>,
    today: NaiveDate,
) -> Result<Vec<DbBookingDetail>> {
    let bookings = sqlx::query_as::<_, DbBookingDetail>(
        r#"
        SELECT b.id, b.event_type_id, b.booker_name, b.booker_email, b.date,
               b.start_time, b.end_time, b.status, b.responses, b.created_at,
               e.title AS event_title, e.duration AS event_duration,
               e.description AS event_description, e.slug AS event_slug
        FROM bookings b
        LEFT JOIN event_types e ON e.id = b.event_type_id
        WHERE ($1::VARCHAR IS NULL OR b.status = $1)
          AND ($2::BOOLEAN IS NULL
               OR ($2 AND b.date >= $3)
               OR (NOT $2 AND b.date <= $3))
        ORDER BY b.date ASC, b.start_time ASC
        "#,
    )
    .bind(status.map(|s| s.as_str()))
    .bind(upcoming)
    .bind(today)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

pub async fn get_booking_detail(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbBookingDetail>> {
    let booking = sqlx::query_as::<_, DbBookingDetail>(
        r#"
        SELECT b.id, b.event_type_id, b.booker_name, b.booker_email, b.date,
               b.start_time, b.end_time, b.status, b.responses, b.created_at,
               e.title AS event_title, e.duration AS event_duration,
               e.description AS event_description, e.slug AS event_slug
        FROM bookings b
        LEFT JOIN event_types e ON e.id = b.event_type_id
        WHERE b.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(booking)
}

pub async fn get_booking_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbBooking>> {
    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, event_type_id, booker_name, booker_email, date, start_time, end_time,
               status, responses, created_at
        FROM bookings
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(booking)
}

pub async fn get_confirmed_bookings_by_date(
    pool: &Pool<Postgres>,
    date: NaiveDate,
) -> Result<Vec<DbBooking>> {
    let bookings = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, event_type_id, booker_name, booker_email, date, start_time, end_time,
               status, responses, created_at
        FROM bookings
        WHERE date = $1 AND status = $2
        ORDER BY start_time ASC
        "#,
    )
    .bind(date)
    .bind(BookingStatus::Confirmed.as_str())
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

/// Inserts a confirmed booking.
///
/// Fails with a unique violation when another confirmed booking already
/// holds the same date and start time.
pub async fn create_booking(pool: &Pool<Postgres>, booking: &NewBooking<'_>) -> Result<DbBooking> {
    let id = Uuid::new_v4();

    tracing::debug!(
        "Creating booking: id={}, event_type_id={}, date={}, start_time={}",
        id,
        booking.event_type_id,
        booking.date,
        booking.start_time
    );

    let created = sqlx::query_as::<_, DbBooking>(
        r#"
        INSERT INTO bookings (id, event_type_id, booker_name, booker_email, date,
                              start_time, end_time, status, responses, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING id, event_type_id, booker_name, booker_email, date, start_time, end_time,
                  status, responses, created_at
        "#,
    )
    .bind(id)
    .bind(booking.event_type_id)
    .bind(booking.booker_name)
    .bind(booking.booker_email)
    .bind(booking.date)
    .bind(booking.start_time)
    .bind(booking.end_time)
    .bind(BookingStatus::Confirmed.as_str())
    .bind(booking.responses)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(created)
}

pub async fn cancel_booking(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbBooking>> {
    tracing::debug!("Cancelling booking: id={}", id);

    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        UPDATE bookings
        SET status = $2
        WHERE id = $1
        RETURNING id, event_type_id, booker_name, booker_email, date, start_time, end_time,
                  status, responses, created_at
        "#,
    )
    .bind(id)
    .bind(BookingStatus::Cancelled.as_str())
    .fetch_optional(pool)
    .await?;

    Ok(booking)
}

pub async fn reschedule_booking(
    pool: &Pool<Postgres>,
    id: Uuid,
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
) -> Result<Option<DbBooking>> {
    tracing::debug!(
        "Rescheduling booking: id={} to {} {}-{}",
        id,
        date,
        start_time,
        end_time
    );

    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        UPDATE bookings
        SET date = $2, start_time = $3, end_time = $4
        WHERE id = $1
        RETURNING id, event_type_id, booker_name, booker_email, date, start_time, end_time,
                  status, responses, created_at
        "#,
    )
    .bind(id)
    .bind(date)
    .bind(start_time)
    .bind(end_time)
    .fetch_optional(pool)
    .await?;

    Ok(booking)
}
