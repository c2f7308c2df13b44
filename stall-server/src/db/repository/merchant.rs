//! Merchant Account Repository

use super::{RepoError, RepoResult};
use shared::models::MerchantAccount;
use sqlx::{SqliteExecutor, SqlitePool};

const SELECT: &str = "SELECT id, name, upi_id, is_active, created_at FROM merchant_accounts";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<MerchantAccount>> {
    let merchants = sqlx::query_as::<_, MerchantAccount>(&format!("{SELECT} ORDER BY id"))
        .fetch_all(pool)
        .await?;
    Ok(merchants)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<MerchantAccount>> {
    let merchant = sqlx::query_as::<_, MerchantAccount>(&format!("{SELECT} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(merchant)
}

/// The merchant currently receiving UPI payments
pub async fn find_active(pool: &SqlitePool) -> RepoResult<Option<MerchantAccount>> {
    let merchant = sqlx::query_as::<_, MerchantAccount>(&format!(
        "{SELECT} WHERE is_active = 1 ORDER BY id LIMIT 1"
    ))
    .fetch_optional(pool)
    .await?;
    Ok(merchant)
}

pub async fn insert<'e, E: SqliteExecutor<'e>>(
    executor: E,
    name: &str,
    upi_id: &str,
    is_active: bool,
) -> RepoResult<i64> {
    let now = shared::util::now_millis();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO merchant_accounts (name, upi_id, is_active, created_at) VALUES (?1, ?2, ?3, ?4) RETURNING id",
    )
    .bind(name)
    .bind(upi_id)
    .bind(is_active)
    .bind(now)
    .fetch_one(executor)
    .await?;
    Ok(id)
}

/// Make `id` the only active merchant
///
/// Deactivate-all and activate-one commit together, so readers see exactly
/// one active merchant before and after.
pub async fn activate(pool: &SqlitePool, id: i64) -> RepoResult<MerchantAccount> {
    let mut tx = pool.begin().await?;

    sqlx::query("UPDATE merchant_accounts SET is_active = 0 WHERE id != ?1 AND is_active = 1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let rows = sqlx::query("UPDATE merchant_accounts SET is_active = 1 WHERE id = ?1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    if rows.rows_affected() == 0 {
        tx.rollback().await?;
        return Err(RepoError::NotFound(format!("merchant {id}")));
    }
    tx.commit().await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("merchant {id}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    async fn seeded_pool() -> SqlitePool {
        let pool = DbService::in_memory().await.unwrap().pool;
        insert(&pool, "Primary UPI", "merchant1@paytm", true).await.unwrap();
        insert(&pool, "Backup UPI 1", "merchant2@phonepe", false).await.unwrap();
        insert(&pool, "Backup UPI 2", "merchant3@ybl", false).await.unwrap();
        pool
    }

    async fn active_ids(pool: &SqlitePool) -> Vec<i64> {
        find_all(pool)
            .await
            .unwrap()
            .into_iter()
            .filter(|m| m.is_active)
            .map(|m| m.id)
            .collect()
    }

    #[tokio::test]
    async fn test_find_active() {
        let pool = seeded_pool().await;
        let active = find_active(&pool).await.unwrap().unwrap();
        assert_eq!(active.upi_id, "merchant1@paytm");
    }

    #[tokio::test]
    async fn test_activate_switches_single_active() {
        let pool = seeded_pool().await;

        let m = activate(&pool, 3).await.unwrap();
        assert!(m.is_active);
        assert_eq!(active_ids(&pool).await, vec![3]);

        activate(&pool, 2).await.unwrap();
        activate(&pool, 2).await.unwrap();
        assert_eq!(active_ids(&pool).await, vec![2]);
    }

    #[tokio::test]
    async fn test_activate_unknown_keeps_current() {
        let pool = seeded_pool().await;

        let err = activate(&pool, 42).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
        assert_eq!(active_ids(&pool).await, vec![1]);
    }

    #[tokio::test]
    async fn test_second_active_row_rejected_by_index() {
        let pool = seeded_pool().await;
        let err = insert(&pool, "Rogue", "rogue@upi", true).await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }
}
