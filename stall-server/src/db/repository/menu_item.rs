//! Menu Item Repository

use super::{RepoError, RepoResult};
use shared::models::{MenuItem, MenuItemUpdate};
use sqlx::{SqliteExecutor, SqlitePool};

const SELECT: &str =
    "SELECT id, name, category, price_full, price_half, is_available, created_at FROM menu_items";

/// Items customers can order, by category then name
pub async fn find_available(pool: &SqlitePool) -> RepoResult<Vec<MenuItem>> {
    let items = sqlx::query_as::<_, MenuItem>(&format!(
        "{SELECT} WHERE is_available = 1 ORDER BY category, name"
    ))
    .fetch_all(pool)
    .await?;
    Ok(items)
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<MenuItem>> {
    let items = sqlx::query_as::<_, MenuItem>(&format!("{SELECT} ORDER BY category, name"))
        .fetch_all(pool)
        .await?;
    Ok(items)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<MenuItem>> {
    let item = sqlx::query_as::<_, MenuItem>(&format!("{SELECT} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(item)
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> RepoResult<Option<MenuItem>> {
    let item = sqlx::query_as::<_, MenuItem>(&format!("{SELECT} WHERE name = ?"))
        .bind(name)
        .fetch_optional(pool)
        .await?;
    Ok(item)
}

/// Names currently on the menu
pub async fn names(pool: &SqlitePool) -> RepoResult<Vec<String>> {
    let names = sqlx::query_scalar::<_, String>("SELECT name FROM menu_items")
        .fetch_all(pool)
        .await?;
    Ok(names)
}

pub async fn count<'e, E: SqliteExecutor<'e>>(executor: E) -> RepoResult<i64> {
    let n = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM menu_items")
        .fetch_one(executor)
        .await?;
    Ok(n)
}

/// Insert an available item, returns its id
pub async fn insert<'e, E: SqliteExecutor<'e>>(
    executor: E,
    name: &str,
    category: &str,
    price_full: f64,
    price_half: f64,
) -> RepoResult<i64> {
    let now = shared::util::now_millis();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO menu_items (name, category, price_full, price_half, is_available, created_at) VALUES (?1, ?2, ?3, ?4, 1, ?5) RETURNING id",
    )
    .bind(name)
    .bind(category)
    .bind(price_full)
    .bind(price_half)
    .bind(now)
    .fetch_one(executor)
    .await?;
    Ok(id)
}

pub async fn create(
    pool: &SqlitePool,
    name: &str,
    category: &str,
    price_full: f64,
    price_half: f64,
) -> RepoResult<MenuItem> {
    let id = insert(pool, name, category, price_full, price_half).await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create menu item".into()))
}

/// Partial update; absent fields keep their value
pub async fn update(pool: &SqlitePool, id: i64, data: MenuItemUpdate) -> RepoResult<MenuItem> {
    let rows = sqlx::query(
        "UPDATE menu_items SET is_available = COALESCE(?1, is_available), price_full = COALESCE(?2, price_full), price_half = COALESCE(?3, price_half) WHERE id = ?4",
    )
    .bind(data.is_available)
    .bind(data.price_full)
    .bind(data.price_half)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("menu item {id}")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("menu item {id}")))
}
