use crate::models::DbSetting;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn get_setting(pool: &Pool<Postgres>, key: &str) -> Result<Option<DbSetting>> {
    let setting = sqlx::query_as::<_, DbSetting>(
        r#"
        SELECT id, key, value, updated_at
        FROM settings
        WHERE key = $1
        "#,
    )
    .bind(key)
    .fetch_optional(pool)
    .await?;

    Ok(setting)
}

pub async fn upsert_setting(pool: &Pool<Postgres>, key: &str, value: &str) -> Result<DbSetting> {
    tracing::debug!("Setting {}={}", key, value);

    let setting = sqlx::query_as::<_, DbSetting>(
        r#"
        INSERT INTO settings (id, key, value, updated_at)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (key)
        DO UPDATE SET value = EXCLUDED.value, updated_at = EXCLUDED.updated_at
        RETURNING id, key, value, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(key)
    .bind(value)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(setting)
}
