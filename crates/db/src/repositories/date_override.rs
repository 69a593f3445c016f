use crate::models::DbDateOverride;
use chrono::{NaiveDate, NaiveTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn list_overrides_by_schedule_id(
    pool: &Pool<Postgres>,
    schedule_id: Uuid,
) -> Result<Vec<DbDateOverride>> {
    let overrides = sqlx::query_as::<_, DbDateOverride>(
        r#"
        SELECT id, schedule_id, date, start_time, end_time, is_enabled, created_at
        FROM date_overrides
        WHERE schedule_id = $1
        ORDER BY date ASC, start_time ASC
        "#,
    )
    .bind(schedule_id)
    .fetch_all(pool)
    .await?;

    Ok(overrides)
}

pub async fn get_overrides_for_date(
    pool: &Pool<Postgres>,
    schedule_id: Uuid,
    date: NaiveDate,
) -> Result<Vec<DbDateOverride>> {
    let overrides = sqlx::query_as::<_, DbDateOverride>(
        r#"
        SELECT id, schedule_id, date, start_time, end_time, is_enabled, created_at
        FROM date_overrides
        WHERE schedule_id = $1 AND date = $2
        ORDER BY start_time ASC
        "#,
    )
    .bind(schedule_id)
    .bind(date)
    .fetch_all(pool)
    .await?;

    Ok(overrides)
}

pub async fn create_override(
    pool: &Pool<Postgres>,
    schedule_id: Uuid,
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    is_enabled: bool,
) -> Result<DbDateOverride> {
    let id = Uuid::new_v4();

    tracing::debug!(
        "Creating date override: id={}, schedule_id={}, date={}, enabled={}",
        id,
        schedule_id,
        date,
        is_enabled
    );

    let date_override = sqlx::query_as::<_, DbDateOverride>(
        r#"
        INSERT INTO date_overrides
            (id, schedule_id, date, start_time, end_time, is_enabled, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, schedule_id, date, start_time, end_time, is_enabled, created_at
        "#,
    )
    .bind(id)
    .bind(schedule_id)
    .bind(date)
    .bind(start_time)
    .bind(end_time)
    .bind(is_enabled)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(date_override)
}

pub async fn delete_override(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM date_overrides
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
