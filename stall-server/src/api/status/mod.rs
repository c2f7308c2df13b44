//! Restaurant status API
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /status | GET | 营业状态 | 无 |
//! | /admin/status | GET | 营业状态 | 管理员 |
//! | /admin/status | PATCH | 开店 / 暂停、暂停提示语 | 管理员 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/status", get(handler::get))
        .route("/admin/status", get(handler::admin_get).patch(handler::update))
}
