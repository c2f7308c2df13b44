//! Admin order updates: payment/order status and delivery progress

use shared::models::{Order, OrderStatus, OrderUpdate, PaymentStatus};
use sqlx::SqlitePool;

use super::service::load;
use super::{OrderError, OrderResult};
use crate::db::repository::{RepoError, order as order_repo};

/// Statuses staff may set by hand (`unpaid` comes only from customers)
fn parse_payment_status(value: &str) -> OrderResult<PaymentStatus> {
    match value.parse() {
        Ok(status @ (PaymentStatus::Pending | PaymentStatus::Paid)) => Ok(status),
        _ => Err(OrderError::InvalidPaymentStatus),
    }
}

fn parse_order_status(value: &str) -> OrderResult<OrderStatus> {
    value.parse().map_err(|_| OrderError::InvalidOrderStatus)
}

/// Apply a partial admin update to an order
///
/// Everything is validated against the current order first; the writes then
/// go out in one transaction, so a rejected update changes nothing. Once all
/// lines are delivered the order is forced to `served`.
pub async fn update_order(pool: &SqlitePool, order_id: i64, data: OrderUpdate) -> OrderResult<Order> {
    let mut order = load(pool, order_id).await?;

    let payment_status = data
        .payment_status
        .as_deref()
        .map(parse_payment_status)
        .transpose()?;
    let mut order_status = data
        .order_status
        .as_deref()
        .map(parse_order_status)
        .transpose()?;

    let mut deliveries = Vec::new();
    for update in data.items.unwrap_or_default() {
        let Some(item_id) = update.id.filter(|id| *id != 0) else {
            continue;
        };
        // Lines of other orders are ignored
        let Some(item) = order.items.iter_mut().find(|i| i.id == item_id) else {
            continue;
        };

        if let Some(full) = update.delivered_full {
            if !(0..=item.full_qty).contains(&full) {
                return Err(OrderError::InvalidDeliveredFull);
            }
            item.delivered_full = full;
        }
        if let Some(half) = update.delivered_half {
            if !(0..=item.half_qty).contains(&half) {
                return Err(OrderError::InvalidDeliveredHalf);
            }
            item.delivered_half = half;
        }
        deliveries.push((item.id, item.delivered_full, item.delivered_half));
    }

    if order.is_fully_delivered() {
        order_status = Some(OrderStatus::Served);
    }

    let mut tx = pool.begin().await.map_err(RepoError::from)?;
    if let Some(status) = payment_status {
        order_repo::set_payment_status(&mut *tx, order_id, status).await?;
    }
    if let Some(status) = order_status {
        order_repo::set_order_status(&mut *tx, order_id, status).await?;
    }
    for (item_id, full, half) in &deliveries {
        order_repo::set_delivered(&mut *tx, order_id, *item_id, *full, *half).await?;
    }
    tx.commit().await.map_err(RepoError::from)?;

    tracing::info!(
        order_id,
        payment_status = ?payment_status,
        order_status = ?order_status,
        deliveries = deliveries.len(),
        "Order updated"
    );

    load(pool, order_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::repository::menu_item;
    use crate::db::repository::order::{NewOrder, NewOrderItem};
    use shared::models::{DeliveryUpdate, PaymentMethod};

    /// Order with lines (2 full, 1 half) and (0 full, 3 half)
    async fn setup() -> (SqlitePool, Order) {
        let pool = DbService::in_memory().await.unwrap().pool;
        let a = menu_item::insert(&pool, "Veg Maida Momos", "Normal Momos", 200.0, 150.0)
            .await
            .unwrap();
        let b = menu_item::insert(&pool, "Veg Oats Momos", "Healthy Momos", 250.0, 180.0)
            .await
            .unwrap();

        let mut conn = pool.acquire().await.unwrap();
        let id = order_repo::insert_with_items(
            &mut conn,
            &NewOrder {
                timestamp: 1,
                payment_method: PaymentMethod::Cash,
                total_amount: 1090.0,
                merchant_upi_id: None,
                customer_name: "Asha",
                customer_phone: "9876543210",
            },
            &[
                NewOrderItem {
                    menu_item_id: a,
                    full_qty: 2,
                    half_qty: 1,
                },
                NewOrderItem {
                    menu_item_id: b,
                    full_qty: 0,
                    half_qty: 3,
                },
            ],
        )
        .await
        .unwrap();
        drop(conn);

        let order = load(&pool, id).await.unwrap();
        (pool, order)
    }

    fn deliver(id: i64, full: Option<i64>, half: Option<i64>) -> DeliveryUpdate {
        DeliveryUpdate {
            id: Some(id),
            delivered_full: full,
            delivered_half: half,
        }
    }

    #[tokio::test]
    async fn test_status_updates() {
        let (pool, order) = setup().await;
        let updated = update_order(
            &pool,
            order.id,
            OrderUpdate {
                payment_status: Some("paid".to_string()),
                order_status: Some("preparing".to_string()),
                items: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.payment_status, PaymentStatus::Paid);
        assert_eq!(updated.order_status, OrderStatus::Preparing);
    }

    #[tokio::test]
    async fn test_invalid_statuses() {
        let (pool, order) = setup().await;
        let err = update_order(
            &pool,
            order.id,
            OrderUpdate {
                payment_status: Some("unpaid".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, OrderError::InvalidPaymentStatus));

        let err = update_order(
            &pool,
            order.id,
            OrderUpdate {
                order_status: Some("cooking".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, OrderError::InvalidOrderStatus));

        let err = update_order(&pool, 999, OrderUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::OrderNotFound));
    }

    #[tokio::test]
    async fn test_partial_delivery_keeps_status() {
        let (pool, order) = setup().await;
        let first = order.items[0].id;
        let updated = update_order(
            &pool,
            order.id,
            OrderUpdate {
                items: Some(vec![deliver(first, Some(2), None)]),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.items[0].delivered_full, 2);
        assert_eq!(updated.items[0].delivered_half, 0);
        assert_eq!(updated.order_status, OrderStatus::New);
    }

    #[tokio::test]
    async fn test_full_delivery_forces_served() {
        let (pool, order) = setup().await;
        let (first, second) = (order.items[0].id, order.items[1].id);
        let updated = update_order(
            &pool,
            order.id,
            OrderUpdate {
                order_status: Some("preparing".to_string()),
                items: Some(vec![
                    deliver(first, Some(2), Some(1)),
                    deliver(second, None, Some(3)),
                ]),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert!(updated.is_fully_delivered());
        assert_eq!(updated.order_status, OrderStatus::Served);
    }

    #[tokio::test]
    async fn test_out_of_bounds_commits_nothing() {
        let (pool, order) = setup().await;
        let (first, second) = (order.items[0].id, order.items[1].id);
        let err = update_order(
            &pool,
            order.id,
            OrderUpdate {
                payment_status: Some("paid".to_string()),
                items: Some(vec![
                    deliver(second, None, Some(3)),
                    deliver(first, Some(3), None),
                ]),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, OrderError::InvalidDeliveredFull));
        assert_eq!(err.to_string(), "Invalid delivered_full quantity");

        let err = update_order(
            &pool,
            order.id,
            OrderUpdate {
                items: Some(vec![deliver(first, None, Some(-1))]),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, OrderError::InvalidDeliveredHalf));

        let unchanged = load(&pool, order.id).await.unwrap();
        assert_eq!(unchanged.payment_status, PaymentStatus::Pending);
        assert!(unchanged.items.iter().all(|i| i.delivered_full == 0 && i.delivered_half == 0));
    }

    #[tokio::test]
    async fn test_foreign_and_missing_ids_are_skipped() {
        let (pool, order) = setup().await;
        let updated = update_order(
            &pool,
            order.id,
            OrderUpdate {
                items: Some(vec![
                    DeliveryUpdate {
                        id: None,
                        delivered_full: Some(99),
                        delivered_half: None,
                    },
                    deliver(12345, Some(99), None),
                ]),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert!(updated.items.iter().all(|i| i.delivered_full == 0));
    }
}
