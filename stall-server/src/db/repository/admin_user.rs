//! Admin User Repository

use super::RepoResult;
use shared::models::AdminUser;
use sqlx::{SqliteExecutor, SqlitePool};

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> RepoResult<Option<AdminUser>> {
    let user = sqlx::query_as::<_, AdminUser>(
        "SELECT id, username, password_hash, created_at FROM admin_users WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<AdminUser>> {
    let user = sqlx::query_as::<_, AdminUser>(
        "SELECT id, username, password_hash, created_at FROM admin_users WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

/// `password_hash` must already be an Argon2 PHC string
pub async fn insert<'e, E: SqliteExecutor<'e>>(
    executor: E,
    username: &str,
    password_hash: &str,
) -> RepoResult<i64> {
    let now = shared::util::now_millis();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO admin_users (username, password_hash, created_at) VALUES (?1, ?2, ?3) RETURNING id",
    )
    .bind(username)
    .bind(password_hash)
    .bind(now)
    .fetch_one(executor)
    .await?;
    Ok(id)
}
