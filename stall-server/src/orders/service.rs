//! Order creation, payment confirmation and listing

use rust_decimal::Decimal;
use shared::models::{Order, OrderCreate, PaymentConfirm, PaymentMethod, PaymentStatus};
use sqlx::SqlitePool;

use super::{OrderError, OrderResult, money, upi};
use crate::db::repository::order::{NewOrder, NewOrderItem};
use crate::db::repository::{
    RepoError, menu_item, merchant, order as order_repo, restaurant_status,
};

/// A freshly created order; UPI orders carry a pay link
#[derive(Debug, Clone)]
pub struct CreatedOrder {
    pub order: Order,
    pub payment_link: Option<String>,
}

/// Validate and persist a customer order
///
/// Checks run in a fixed order and the first failure wins: restaurant
/// open, required fields, payment method, items, merchant, each line, total.
/// The total is recomputed from current menu prices.
pub async fn create_order(pool: &SqlitePool, data: OrderCreate) -> OrderResult<CreatedOrder> {
    match restaurant_status::get(pool).await? {
        Some(status) if status.is_open => {}
        Some(status) => {
            return Err(OrderError::RestaurantPaused {
                message: status.pause_message,
            });
        }
        None => {
            return Err(OrderError::RestaurantPaused {
                message: "Restaurant is closed".to_string(),
            });
        }
    }

    let (Some(items), Some(payment_method)) = (data.items, data.payment_method) else {
        return Err(OrderError::MissingFields);
    };

    let customer_name = data.customer_name.unwrap_or_default().trim().to_string();
    let customer_phone = data.customer_phone.unwrap_or_default().trim().to_string();
    if customer_name.is_empty() {
        return Err(OrderError::CustomerNameRequired);
    }
    if customer_phone.is_empty() {
        return Err(OrderError::CustomerPhoneRequired);
    }

    let payment_method: PaymentMethod = payment_method
        .parse()
        .map_err(|_| OrderError::InvalidPaymentMethod)?;

    if items.is_empty() {
        return Err(OrderError::NoItems);
    }

    let merchant = match payment_method {
        PaymentMethod::Upi => Some(
            merchant::find_active(pool)
                .await?
                .ok_or(OrderError::NoActiveMerchant)?,
        ),
        PaymentMethod::Cash => None,
    };

    let mut total = Decimal::ZERO;
    let mut lines = Vec::with_capacity(items.len());
    for input in &items {
        let menu_item_id = match input.menu_item_id {
            Some(id) if id != 0 => id,
            _ => return Err(OrderError::MissingMenuItemId),
        };
        let full_qty = input.full_qty.unwrap_or(0);
        let half_qty = input.half_qty.unwrap_or(0);
        if full_qty < 0 || half_qty < 0 {
            return Err(OrderError::NegativeQuantity);
        }
        if full_qty > money::MAX_QUANTITY || half_qty > money::MAX_QUANTITY {
            return Err(OrderError::QuantityTooLarge);
        }
        if full_qty == 0 && half_qty == 0 {
            continue;
        }

        let item = menu_item::find_by_id(pool, menu_item_id)
            .await?
            .ok_or(OrderError::MenuItemNotFound(menu_item_id))?;
        if !item.is_available {
            return Err(OrderError::MenuItemUnavailable(item.name));
        }

        total = money::line_total(item.price_full, item.price_half, full_qty, half_qty)
            .and_then(|line| total.checked_add(line))
            .ok_or(OrderError::TotalTooLarge)?;
        lines.push(NewOrderItem {
            menu_item_id,
            full_qty,
            half_qty,
        });
    }

    if total <= Decimal::ZERO {
        return Err(OrderError::EmptyTotal);
    }

    let new_order = NewOrder {
        timestamp: shared::util::now_millis(),
        payment_method,
        total_amount: money::to_f64(total),
        merchant_upi_id: merchant.as_ref().map(|m| m.id),
        customer_name: &customer_name,
        customer_phone: &customer_phone,
    };

    let mut tx = pool.begin().await.map_err(RepoError::from)?;
    let order_id = order_repo::insert_with_items(&mut tx, &new_order, &lines).await?;
    tx.commit().await.map_err(RepoError::from)?;

    let order = load(pool, order_id).await?;
    let payment_link = merchant
        .as_ref()
        .map(|m| upi::payment_link(m, order.id, total));

    tracing::info!(
        order_id = order.id,
        payment_method = %order.payment_method,
        total = order.total_amount,
        lines = order.items.len(),
        "Order created"
    );

    Ok(CreatedOrder {
        order,
        payment_link,
    })
}

/// Customer-reported UPI payment
///
/// Moves `payment_status` to `unpaid`: staff still have to verify and mark
/// the order paid from the admin panel.
pub async fn confirm_payment(pool: &SqlitePool, data: PaymentConfirm) -> OrderResult<Order> {
    let order_id = data.order_id.ok_or(OrderError::MissingOrderId)?;
    let order = order_repo::find_by_id(pool, order_id)
        .await?
        .ok_or(OrderError::OrderNotFound)?;

    if order.payment_method != PaymentMethod::Upi {
        return Err(OrderError::NotUpiOrder);
    }
    if order.payment_status == PaymentStatus::Paid {
        return Err(OrderError::AlreadyPaid);
    }

    order_repo::set_payment_status(pool, order_id, PaymentStatus::Unpaid).await?;
    tracing::info!(order_id, "Customer confirmed UPI payment");

    load(pool, order_id).await
}

/// Orders still being worked on, newest first
pub async fn list_active(pool: &SqlitePool) -> OrderResult<Vec<Order>> {
    let orders = order_repo::find_all(pool).await?;
    Ok(orders.into_iter().filter(|o| !o.is_fully_delivered()).collect())
}

/// Fully delivered orders, newest first
pub async fn list_delivered(pool: &SqlitePool) -> OrderResult<Vec<Order>> {
    let orders = order_repo::find_all(pool).await?;
    Ok(orders.into_iter().filter(Order::is_fully_delivered).collect())
}

pub(super) async fn load(pool: &SqlitePool, order_id: i64) -> OrderResult<Order> {
    order_repo::find_by_id(pool, order_id)
        .await?
        .ok_or(OrderError::OrderNotFound)
}
