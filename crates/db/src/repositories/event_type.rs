use crate::models::DbEventType;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn list_event_types(pool: &Pool<Postgres>) -> Result<Vec<DbEventType>> {
    let event_types = sqlx::query_as::<_, DbEventType>(
        r#"
        SELECT id, title, description, duration, slug, created_at, updated_at
        FROM event_types
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(event_types)
}

pub async fn get_event_type_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbEventType>> {
    let event_type = sqlx::query_as::<_, DbEventType>(
        r#"
        SELECT id, title, description, duration, slug, created_at, updated_at
        FROM event_types
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(event_type)
}

pub async fn get_event_type_by_slug(
    pool: &Pool<Postgres>,
    slug: &str,
) -> Result<Option<DbEventType>> {
    tracing::debug!("Getting event type by slug: {}", slug);

    let event_type = sqlx::query_as::<_, DbEventType>(
        r#"
        SELECT id, title, description, duration, slug, created_at, updated_at
        FROM event_types
        WHERE slug = $1
        "#,
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?;

    Ok(event_type)
}

pub async fn create_event_type(
    pool: &Pool<Postgres>,
    title: &str,
    description: Option<&str>,
    duration: i32,
    slug: &str,
) -> Result<DbEventType> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating event type: id={}, slug={}, duration={}",
        id,
        slug,
        duration
    );

    let event_type = sqlx::query_as::<_, DbEventType>(
        r#"
        INSERT INTO event_types (id, title, description, duration, slug, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $6)
        RETURNING id, title, description, duration, slug, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(description.unwrap_or(""))
    .bind(duration)
    .bind(slug)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(event_type)
}

pub async fn update_event_type(
    pool: &Pool<Postgres>,
    id: Uuid,
    title: &str,
    description: Option<&str>,
    duration: i32,
    slug: &str,
) -> Result<Option<DbEventType>> {
    let event_type = sqlx::query_as::<_, DbEventType>(
        r#"
        UPDATE event_types
        SET title = $2, description = $3, duration = $4, slug = $5, updated_at = $6
        WHERE id = $1
        RETURNING id, title, description, duration, slug, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(description)
    .bind(duration)
    .bind(slug)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await?;

    Ok(event_type)
}

/// Deletes the event type and, through the foreign key, its bookings.
pub async fn delete_event_type(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM event_types
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
