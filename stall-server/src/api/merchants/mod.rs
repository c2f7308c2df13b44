//! Merchant account API
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /admin/merchants | GET | 收款账户列表 | 管理员 |
//! | /admin/merchant/{id}/activate | PATCH | 切换当前收款账户 | 管理员 |

mod handler;

use axum::{
    Router,
    routing::{get, patch},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/admin/merchants", get(handler::list))
        .route("/admin/merchant/{id}/activate", patch(handler::activate))
}
