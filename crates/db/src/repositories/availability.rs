use crate::models::DbAvailability;
use calin_core::models::availability::{BulkAvailabilityUpdate, WindowRequest};
use chrono::{NaiveTime, Utc};
use eyre::Result;
use sqlx::{PgConnection, Pool, Postgres};
use uuid::Uuid;

pub async fn list_windows_by_schedule_id(
    pool: &Pool<Postgres>,
    schedule_id: Uuid,
) -> Result<Vec<DbAvailability>> {
    let windows = sqlx::query_as::<_, DbAvailability>(
        r#"
        SELECT id, schedule_id, day_of_week, start_time, end_time, is_enabled, created_at
        FROM availability
        WHERE schedule_id = $1
        ORDER BY day_of_week ASC, start_time ASC
        "#,
    )
    .bind(schedule_id)
    .fetch_all(pool)
    .await?;

    Ok(windows)
}

pub async fn update_window(
    pool: &Pool<Postgres>,
    id: Uuid,
    start_time: NaiveTime,
    end_time: NaiveTime,
    is_enabled: bool,
) -> Result<Option<DbAvailability>> {
    let mut conn = pool.acquire().await?;
    update_window_on(&mut conn, id, start_time, end_time, is_enabled).await
}

/// Applies a batch of window updates atomically. Ids that match no window
/// are skipped; any storage error rolls back the whole batch.
pub async fn update_windows(
    pool: &Pool<Postgres>,
    updates: &[BulkAvailabilityUpdate],
) -> Result<Vec<DbAvailability>> {
    let mut tx = pool.begin().await?;

    let mut updated = Vec::with_capacity(updates.len());
    for update in updates {
        match update_window_on(
            &mut tx,
            update.id,
            update.start_time,
            update.end_time,
            update.is_enabled,
        )
        .await?
        {
            Some(window) => updated.push(window),
            None => tracing::warn!("Skipping unknown availability window {}", update.id),
        }
    }

    tx.commit().await?;

    Ok(updated)
}

async fn update_window_on(
    conn: &mut PgConnection,
    id: Uuid,
    start_time: NaiveTime,
    end_time: NaiveTime,
    is_enabled: bool,
) -> Result<Option<DbAvailability>> {
    tracing::debug!(
        "Updating availability window: id={}, {}-{}, enabled={}",
        id,
        start_time,
        end_time,
        is_enabled
    );

    let window = sqlx::query_as::<_, DbAvailability>(
        r#"
        UPDATE availability
        SET start_time = $2, end_time = $3, is_enabled = $4
        WHERE id = $1
        RETURNING id, schedule_id, day_of_week, start_time, end_time, is_enabled, created_at
        "#,
    )
    .bind(id)
    .bind(start_time)
    .bind(end_time)
    .bind(is_enabled)
    .fetch_optional(conn)
    .await?;

    Ok(window)
}

/// Replaces every weekly window of a schedule in one transaction.
pub async fn replace_windows(
    pool: &Pool<Postgres>,
    schedule_id: Uuid,
    windows: &[WindowRequest],
) -> Result<Vec<DbAvailability>> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        DELETE FROM availability
        WHERE schedule_id = $1
        "#,
    )
    .bind(schedule_id)
    .execute(&mut *tx)
    .await?;

    let mut created = Vec::with_capacity(windows.len());
    for window in windows {
        created.push(
            insert_window(
                &mut tx,
                schedule_id,
                window.day_of_week,
                window.start_time,
                window.end_time,
                window.is_enabled,
            )
            .await?,
        );
    }

    tx.commit().await?;

    created.sort_by_key(|w| (w.day_of_week, w.start_time));
    Ok(created)
}

pub(crate) async fn insert_window(
    conn: &mut PgConnection,
    schedule_id: Uuid,
    day_of_week: i32,
    start_time: NaiveTime,
    end_time: NaiveTime,
    is_enabled: bool,
) -> Result<DbAvailability> {
    let window = sqlx::query_as::<_, DbAvailability>(
        r#"
        INSERT INTO availability
            (id, schedule_id, day_of_week, start_time, end_time, is_enabled, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, schedule_id, day_of_week, start_time, end_time, is_enabled, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(schedule_id)
    .bind(day_of_week)
    .bind(start_time)
    .bind(end_time)
    .bind(is_enabled)
    .bind(Utc::now())
    .fetch_one(conn)
    .await?;

    Ok(window)
}
