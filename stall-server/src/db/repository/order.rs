//! Order Repository
//!
//! Orders are always returned with their line items attached.

use std::collections::HashMap;

use super::RepoResult;
use shared::models::{Order, OrderItem, OrderStatus, PaymentMethod, PaymentStatus};
use sqlx::{SqliteConnection, SqliteExecutor, SqlitePool};

const SELECT_ORDER: &str = "SELECT o.id, o.timestamp, o.payment_method, o.payment_status, o.order_status, o.total_amount, o.merchant_upi_id, m.upi_id AS merchant_upi, o.customer_name, o.customer_phone FROM orders o LEFT JOIN merchant_accounts m ON m.id = o.merchant_upi_id";

const SELECT_ITEM: &str = "SELECT oi.id, oi.order_id, oi.menu_item_id, mi.name AS menu_item_name, oi.full_qty, oi.half_qty, oi.delivered_full, oi.delivered_half FROM order_items oi LEFT JOIN menu_items mi ON mi.id = oi.menu_item_id";

/// Order row to insert; status fields start at pending/new
#[derive(Debug, Clone)]
pub struct NewOrder<'a> {
    pub timestamp: i64,
    pub payment_method: PaymentMethod,
    pub total_amount: f64,
    pub merchant_upi_id: Option<i64>,
    pub customer_name: &'a str,
    pub customer_phone: &'a str,
}

/// Line to insert; delivery starts at zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewOrderItem {
    pub menu_item_id: i64,
    pub full_qty: i64,
    pub half_qty: i64,
}

/// Insert an order with its lines on the caller's connection (usually a transaction)
pub async fn insert_with_items(
    conn: &mut SqliteConnection,
    order: &NewOrder<'_>,
    items: &[NewOrderItem],
) -> RepoResult<i64> {
    let order_id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO orders (timestamp, payment_method, payment_status, order_status, total_amount, merchant_upi_id, customer_name, customer_phone) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8) RETURNING id",
    )
    .bind(order.timestamp)
    .bind(order.payment_method)
    .bind(PaymentStatus::Pending)
    .bind(OrderStatus::New)
    .bind(order.total_amount)
    .bind(order.merchant_upi_id)
    .bind(order.customer_name)
    .bind(order.customer_phone)
    .fetch_one(&mut *conn)
    .await?;

    for item in items {
        sqlx::query(
            "INSERT INTO order_items (order_id, menu_item_id, full_qty, half_qty, delivered_full, delivered_half) VALUES (?1, ?2, ?3, ?4, 0, 0)",
        )
        .bind(order_id)
        .bind(item.menu_item_id)
        .bind(item.full_qty)
        .bind(item.half_qty)
        .execute(&mut *conn)
        .await?;
    }

    Ok(order_id)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Order>> {
    let order = sqlx::query_as::<_, Order>(&format!("{SELECT_ORDER} WHERE o.id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    let Some(mut order) = order else {
        return Ok(None);
    };
    order.items = find_items(pool, id).await?;
    Ok(Some(order))
}

pub async fn find_items(pool: &SqlitePool, order_id: i64) -> RepoResult<Vec<OrderItem>> {
    let items = sqlx::query_as::<_, OrderItem>(&format!(
        "{SELECT_ITEM} WHERE oi.order_id = ? ORDER BY oi.id"
    ))
    .bind(order_id)
    .fetch_all(pool)
    .await?;
    Ok(items)
}

/// All orders, newest first, with items
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Order>> {
    let mut orders = sqlx::query_as::<_, Order>(&format!(
        "{SELECT_ORDER} ORDER BY o.timestamp DESC, o.id DESC"
    ))
    .fetch_all(pool)
    .await?;

    let items = sqlx::query_as::<_, OrderItem>(&format!("{SELECT_ITEM} ORDER BY oi.id"))
        .fetch_all(pool)
        .await?;

    let mut by_order: HashMap<i64, Vec<OrderItem>> = HashMap::new();
    for item in items {
        by_order.entry(item.order_id).or_default().push(item);
    }
    for order in &mut orders {
        order.items = by_order.remove(&order.id).unwrap_or_default();
    }
    Ok(orders)
}

pub async fn set_payment_status<'e, E: SqliteExecutor<'e>>(
    executor: E,
    id: i64,
    status: PaymentStatus,
) -> RepoResult<u64> {
    let rows = sqlx::query("UPDATE orders SET payment_status = ?1 WHERE id = ?2")
        .bind(status)
        .bind(id)
        .execute(executor)
        .await?;
    Ok(rows.rows_affected())
}

pub async fn set_order_status<'e, E: SqliteExecutor<'e>>(
    executor: E,
    id: i64,
    status: OrderStatus,
) -> RepoResult<u64> {
    let rows = sqlx::query("UPDATE orders SET order_status = ?1 WHERE id = ?2")
        .bind(status)
        .bind(id)
        .execute(executor)
        .await?;
    Ok(rows.rows_affected())
}

/// Set delivery counters of one line (scoped to its order)
pub async fn set_delivered<'e, E: SqliteExecutor<'e>>(
    executor: E,
    order_id: i64,
    item_id: i64,
    delivered_full: i64,
    delivered_half: i64,
) -> RepoResult<u64> {
    let rows = sqlx::query(
        "UPDATE order_items SET delivered_full = ?1, delivered_half = ?2 WHERE id = ?3 AND order_id = ?4",
    )
    .bind(delivered_full)
    .bind(delivered_half)
    .bind(item_id)
    .bind(order_id)
    .execute(executor)
    .await?;
    Ok(rows.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::repository::{RepoError, menu_item, merchant};

    async fn test_pool() -> SqlitePool {
        let pool = DbService::in_memory().await.unwrap().pool;
        menu_item::insert(&pool, "Veg Maida Momos", "Normal Momos", 200.0, 150.0)
            .await
            .unwrap();
        menu_item::insert(&pool, "Chicken Dim Sum", "Dim Sums", 120.0, 70.0)
            .await
            .unwrap();
        merchant::insert(&pool, "Primary UPI", "merchant1@paytm", true)
            .await
            .unwrap();
        pool
    }

    async fn place(
        pool: &SqlitePool,
        timestamp: i64,
        method: PaymentMethod,
        items: &[NewOrderItem],
    ) -> i64 {
        let mut conn = pool.acquire().await.unwrap();
        insert_with_items(
            &mut conn,
            &NewOrder {
                timestamp,
                payment_method: method,
                total_amount: 350.0,
                merchant_upi_id: (method == PaymentMethod::Upi).then_some(1),
                customer_name: "Asha",
                customer_phone: "9876543210",
            },
            items,
        )
        .await
        .unwrap()
    }

    const LINE: NewOrderItem = NewOrderItem {
        menu_item_id: 1,
        full_qty: 1,
        half_qty: 1,
    };

    #[tokio::test]
    async fn test_insert_and_load_with_joins() {
        let pool = test_pool().await;
        let id = place(&pool, 1_000, PaymentMethod::Upi, &[LINE]).await;

        let order = find_by_id(&pool, id).await.unwrap().unwrap();
        assert_eq!(order.payment_status, PaymentStatus::Pending);
        assert_eq!(order.order_status, OrderStatus::New);
        assert_eq!(order.merchant_upi.as_deref(), Some("merchant1@paytm"));
        assert_eq!(order.items.len(), 1);
        assert_eq!(
            order.items[0].menu_item_name.as_deref(),
            Some("Veg Maida Momos")
        );
        assert_eq!(order.items[0].delivered_full, 0);
    }

    #[tokio::test]
    async fn test_find_all_groups_items_newest_first() {
        let pool = test_pool().await;
        let older = place(&pool, 1_000, PaymentMethod::Cash, &[LINE]).await;
        let newer = place(
            &pool,
            2_000,
            PaymentMethod::Cash,
            &[
                LINE,
                NewOrderItem {
                    menu_item_id: 2,
                    full_qty: 2,
                    half_qty: 0,
                },
            ],
        )
        .await;

        let orders = find_all(&pool).await.unwrap();
        assert_eq!(orders.iter().map(|o| o.id).collect::<Vec<_>>(), vec![newer, older]);
        assert_eq!(orders[0].items.len(), 2);
        assert_eq!(orders[1].items.len(), 1);
        assert!(orders[1].merchant_upi.is_none());
    }

    #[tokio::test]
    async fn test_delivery_bounds_enforced_by_schema() {
        let pool = test_pool().await;
        let id = place(&pool, 1_000, PaymentMethod::Cash, &[LINE]).await;
        let item_id = find_items(&pool, id).await.unwrap()[0].id;

        assert_eq!(set_delivered(&pool, id, item_id, 1, 1).await.unwrap(), 1);
        let err = set_delivered(&pool, id, item_id, 2, 0).await.unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));

        // Line of another order is not touched
        assert_eq!(set_delivered(&pool, id + 1, item_id, 0, 0).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_status_updates() {
        let pool = test_pool().await;
        let id = place(&pool, 1_000, PaymentMethod::Upi, &[LINE]).await;

        set_payment_status(&pool, id, PaymentStatus::Paid).await.unwrap();
        set_order_status(&pool, id, OrderStatus::Preparing).await.unwrap();

        let order = find_by_id(&pool, id).await.unwrap().unwrap();
        assert_eq!(order.payment_status, PaymentStatus::Paid);
        assert_eq!(order.order_status, OrderStatus::Preparing);
        assert_eq!(set_order_status(&pool, 999, OrderStatus::New).await.unwrap(), 0);
    }
}
