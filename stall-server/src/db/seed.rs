//! Initial data for an empty database
//!
//! Starter menu, merchant accounts, status singleton and the admin login,
//! written in one transaction.

use sqlx::SqlitePool;

use super::repository::{RepoError, RepoResult, admin_user, menu_item, merchant, restaurant_status};
use crate::auth::hash_password;
use crate::catalog::universal;

/// (name, upi_id, is_active)
const MERCHANTS: [(&str, &str, bool); 3] = [
    ("Primary UPI", "merchant1@paytm", true),
    ("Backup UPI 1", "merchant2@phonepe", false),
    ("Backup UPI 2", "merchant3@ybl", false),
];

/// Seed when the menu is empty. Returns whether anything was written.
pub async fn seed_if_empty(
    pool: &SqlitePool,
    admin_username: &str,
    admin_password: &str,
) -> RepoResult<bool> {
    if menu_item::count(pool).await? > 0 {
        tracing::debug!("Menu already populated, skipping seed");
        return Ok(false);
    }

    let admin_exists = admin_user::find_by_username(pool, admin_username)
        .await?
        .is_some();
    let merchants_exist = !merchant::find_all(pool).await?.is_empty();
    let password_hash = if admin_exists {
        None
    } else {
        Some(
            hash_password(admin_password)
                .map_err(|e| RepoError::Database(format!("Failed to hash admin password: {e}")))?,
        )
    };

    let mut tx = pool.begin().await?;

    let mut menu_count = 0;
    for item in universal::starter_menu() {
        menu_item::insert(
            &mut *tx,
            item.name,
            item.category,
            item.price_full,
            item.price_half,
        )
        .await?;
        menu_count += 1;
    }

    if !merchants_exist {
        for (name, upi_id, is_active) in MERCHANTS {
            merchant::insert(&mut *tx, name, upi_id, is_active).await?;
        }
    }

    restaurant_status::ensure(&mut *tx).await?;

    if let Some(hash) = &password_hash {
        admin_user::insert(&mut *tx, admin_username, hash).await?;
    }

    tx.commit().await?;

    tracing::info!(
        menu_items = menu_count,
        merchants = if merchants_exist { 0 } else { MERCHANTS.len() },
        admin_created = password_hash.is_some(),
        "Seeded empty database"
    );
    Ok(true)
}
