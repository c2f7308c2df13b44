//! Order API
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /order | POST | 顾客下单 | 无 |
//! | /payment/confirm | POST | 顾客确认 UPI 已付款 | 无 |
//! | /admin/orders | GET | 未出完餐的订单 | 管理员 |
//! | /admin/orders/delivered | GET | 已出完餐的订单 | 管理员 |
//! | /admin/order/{id} | PATCH | 付款状态、订单状态、出餐进度 | 管理员 |

mod handler;

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/order", post(handler::create))
        .route("/payment/confirm", post(handler::confirm_payment))
        .route("/admin/orders", get(handler::list_active))
        .route("/admin/orders/delivered", get(handler::list_delivered))
        .route("/admin/order/{id}", patch(handler::update))
}
