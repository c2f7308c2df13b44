//! Export API
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /admin/export-db | GET | 下载全部数据 (xlsx) | 管理员 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/admin/export-db", get(handler::export_db))
}
