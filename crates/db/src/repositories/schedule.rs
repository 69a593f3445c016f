use crate::models::DbSchedule;
use crate::repositories::availability::insert_window;
use chrono::{NaiveTime, Utc};
use eyre::{eyre, Result};
use sqlx::{PgConnection, Pool, Postgres};
use uuid::Uuid;

/// Weekdays (Monday to Friday) enabled on a freshly created schedule.
const DEFAULT_WORKING_DAYS: [i32; 5] = [1, 2, 3, 4, 5];

pub async fn list_schedules(pool: &Pool<Postgres>) -> Result<Vec<DbSchedule>> {
    let schedules = sqlx::query_as::<_, DbSchedule>(
        r#"
        SELECT id, name, timezone, is_default, created_at
        FROM schedules
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(schedules)
}

pub async fn get_schedule_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbSchedule>> {
    tracing::debug!("Getting schedule by id: {}", id);

    let schedule = sqlx::query_as::<_, DbSchedule>(
        r#"
        SELECT id, name, timezone, is_default, created_at
        FROM schedules
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(schedule)
}

/// The schedule flagged as default, falling back to the oldest one.
pub async fn get_default_schedule(pool: &Pool<Postgres>) -> Result<Option<DbSchedule>> {
    let schedule = sqlx::query_as::<_, DbSchedule>(
        r#"
        SELECT id, name, timezone, is_default, created_at
        FROM schedules
        ORDER BY is_default DESC, created_at ASC
        LIMIT 1
        "#,
    )
    .fetch_optional(pool)
    .await?;

    Ok(schedule)
}

/// Creates a schedule with Monday to Friday 09:00-17:00 enabled and the
/// weekend disabled. The first schedule ever created becomes the default.
pub async fn create_schedule(
    pool: &Pool<Postgres>,
    name: &str,
    timezone: &str,
    is_default: bool,
) -> Result<DbSchedule> {
    let id = Uuid::new_v4();
    let now = Utc::now();
    let mut tx = pool.begin().await?;

    let existing = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM schedules")
        .fetch_one(&mut *tx)
        .await?;
    let is_default = is_default || existing == 0;

    tracing::debug!(
        "Creating schedule: id={}, name={}, timezone={}, is_default={}",
        id,
        name,
        timezone,
        is_default
    );

    if is_default {
        clear_default(&mut tx).await?;
    }

    let schedule = sqlx::query_as::<_, DbSchedule>(
        r#"
        INSERT INTO schedules (id, name, timezone, is_default, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, timezone, is_default, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(timezone)
    .bind(is_default)
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    let start = NaiveTime::from_hms_opt(9, 0, 0).ok_or_else(|| eyre!("Invalid default start"))?;
    let end = NaiveTime::from_hms_opt(17, 0, 0).ok_or_else(|| eyre!("Invalid default end"))?;
    for day_of_week in 0..7 {
        let enabled = DEFAULT_WORKING_DAYS.contains(&day_of_week);
        insert_window(&mut tx, schedule.id, day_of_week, start, end, enabled).await?;
    }

    tx.commit().await?;

    tracing::debug!("Schedule created successfully: id={}", id);
    Ok(schedule)
}

pub async fn update_schedule(
    pool: &Pool<Postgres>,
    id: Uuid,
    name: Option<&str>,
    timezone: Option<&str>,
    is_default: Option<bool>,
) -> Result<Option<DbSchedule>> {
    let Some(schedule) = get_schedule_by_id(pool, id).await? else {
        return Ok(None);
    };

    let name = name.unwrap_or(&schedule.name);
    let timezone = timezone.unwrap_or(&schedule.timezone);
    let is_default = is_default.unwrap_or(schedule.is_default);

    let mut tx = pool.begin().await?;
    if is_default && !schedule.is_default {
        clear_default(&mut tx).await?;
    }

    let updated_schedule = sqlx::query_as::<_, DbSchedule>(
        r#"
        UPDATE schedules
        SET name = $2, timezone = $3, is_default = $4
        WHERE id = $1
        RETURNING id, name, timezone, is_default, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(timezone)
    .bind(is_default)
    .fetch_optional(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(updated_schedule)
}

/// Deletes the schedule together with its windows and overrides.
pub async fn delete_schedule(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM schedules
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

async fn clear_default(conn: &mut PgConnection) -> Result<()> {
    sqlx::query("UPDATE schedules SET is_default = FALSE WHERE is_default")
        .execute(conn)
        .await?;

    Ok(())
}
