//! Admin session API
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /admin/login | POST | 登录，下发会话 Cookie | 无 |
//! | /admin/logout | POST | 清除会话 Cookie | 管理员 |
//! | /admin/me | GET | 当前管理员 | 管理员 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/admin/login", post(handler::login))
        .route("/admin/logout", post(handler::logout))
        .route("/admin/me", get(handler::me))
}
