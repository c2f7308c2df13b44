//! Restaurant Status Repository (Singleton)

use super::{RepoError, RepoResult};
use shared::models::{DEFAULT_PAUSE_MESSAGE, RestaurantStatus, RestaurantStatusUpdate};
use sqlx::{SqliteExecutor, SqlitePool};

const SINGLETON_ID: i64 = 1;

pub async fn get(pool: &SqlitePool) -> RepoResult<Option<RestaurantStatus>> {
    let status = sqlx::query_as::<_, RestaurantStatus>(
        "SELECT id, is_open, pause_message, updated_at FROM restaurant_status WHERE id = ?",
    )
    .bind(SINGLETON_ID)
    .fetch_optional(pool)
    .await?;
    Ok(status)
}

/// Insert the default row (open) unless it already exists
pub async fn ensure<'e, E: SqliteExecutor<'e>>(executor: E) -> RepoResult<()> {
    let now = shared::util::now_millis();
    // INSERT OR IGNORE: racing first reads cannot create two rows
    sqlx::query(
        "INSERT OR IGNORE INTO restaurant_status (id, is_open, pause_message, updated_at) VALUES (?1, 1, ?2, ?3)",
    )
    .bind(SINGLETON_ID)
    .bind(DEFAULT_PAUSE_MESSAGE)
    .bind(now)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn get_or_create(pool: &SqlitePool) -> RepoResult<RestaurantStatus> {
    if let Some(status) = get(pool).await? {
        return Ok(status);
    }

    ensure(pool).await?;
    get(pool)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create restaurant status".into()))
}

/// Partial update, creating the singleton first when absent (single upsert)
pub async fn update(pool: &SqlitePool, data: RestaurantStatusUpdate) -> RepoResult<RestaurantStatus> {
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO restaurant_status (id, is_open, pause_message, updated_at) VALUES (?1, COALESCE(?2, 1), COALESCE(?3, ?4), ?5) \
         ON CONFLICT(id) DO UPDATE SET is_open = COALESCE(?2, is_open), pause_message = COALESCE(?3, pause_message), updated_at = ?5",
    )
    .bind(SINGLETON_ID)
    .bind(data.is_open)
    .bind(&data.pause_message)
    .bind(DEFAULT_PAUSE_MESSAGE)
    .bind(now)
    .execute(pool)
    .await?;

    get(pool)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to read restaurant status after update".into()))
}
