//! Order Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use shared::models::{Order, OrderCreate, OrderUpdate, PaymentConfirm};

use crate::api::ActionResponse;
use crate::auth::CurrentAdmin;
use crate::core::ServerState;
use crate::orders;
use crate::utils::{AppJson, AppResult};

#[derive(Debug, Serialize)]
pub struct OrderData {
    order: Order,
}

/// Body of POST /order
#[derive(Debug, Serialize)]
pub struct CreateOrderResponse {
    success: bool,
    order: Order,
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    payment_link: Option<String>,
}

/// POST /order - 顾客下单
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<OrderCreate>,
) -> AppResult<(StatusCode, Json<CreateOrderResponse>)> {
    let created = orders::create_order(&state.pool, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateOrderResponse {
            success: true,
            order: created.order,
            message: "Order created successfully",
            payment_link: created.payment_link,
        }),
    ))
}

/// POST /payment/confirm - 顾客确认 UPI 已付款
pub async fn confirm_payment(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<PaymentConfirm>,
) -> AppResult<Json<ActionResponse<OrderData>>> {
    let order = orders::confirm_payment(&state.pool, payload).await?;
    Ok(Json(ActionResponse::ok("Payment confirmed", OrderData { order })))
}

/// GET /admin/orders - 未出完餐的订单 (新订单在前)
pub async fn list_active(
    State(state): State<ServerState>,
    _admin: CurrentAdmin,
) -> AppResult<Json<Vec<Order>>> {
    let active = orders::list_active(&state.pool).await?;
    Ok(Json(active))
}

/// GET /admin/orders/delivered - 已出完餐的订单
pub async fn list_delivered(
    State(state): State<ServerState>,
    _admin: CurrentAdmin,
) -> AppResult<Json<Vec<Order>>> {
    let delivered = orders::list_delivered(&state.pool).await?;
    Ok(Json(delivered))
}

/// PATCH /admin/order/{id} - 更新付款状态、订单状态、出餐进度
pub async fn update(
    State(state): State<ServerState>,
    admin: CurrentAdmin,
    Path(id): Path<i64>,
    AppJson(payload): AppJson<OrderUpdate>,
) -> AppResult<Json<ActionResponse<OrderData>>> {
    let order = orders::update_order(&state.pool, id, payload).await?;
    tracing::debug!(admin = %admin.username, order_id = id, "Order update applied");
    Ok(Json(ActionResponse::ok(
        "Order updated successfully",
        OrderData { order },
    )))
}
