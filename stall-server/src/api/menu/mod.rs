//! Menu API
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /menu | GET | 在售菜品 | 无 |
//! | /admin/menu | GET | 全部菜品 | 管理员 |
//! | /admin/menu/{id} | PATCH | 上下架、改价 | 管理员 |
//! | /admin/menu/add | POST | 从通用列表加入菜单 | 管理员 |
//! | /admin/universal-items | GET | 通用菜品列表 | 管理员 |

mod handler;

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/menu", get(handler::list_available))
        .route("/admin/menu", get(handler::list_all))
        .route("/admin/menu/add", post(handler::add))
        .route("/admin/menu/{id}", patch(handler::update))
        .route("/admin/universal-items", get(handler::list_universal))
}
