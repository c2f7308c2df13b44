//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`status`] - 营业状态 (顾客读取 / 管理员修改)
//! - [`menu`] - 菜单与通用菜品列表
//! - [`orders`] - 下单、付款确认、订单管理
//! - [`merchants`] - UPI 收款账户
//! - [`session`] - 管理员登录、登出
//! - [`export`] - 数据库导出
//!
//! `/admin` 下的路由 (登录除外) 需要管理员会话，由 [`require_auth`] 统一校验。
//!
//! [`require_auth`]: crate::auth::require_auth

pub mod middleware;

pub mod export;
pub mod health;
pub mod menu;
pub mod merchants;
pub mod orders;
pub mod session;
pub mod status;

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue, Method, header};
use serde::Serialize;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::{Config, ServerState};

pub use crate::utils::{AppError, AppResult};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// `{success, message, <key>: value}` body of admin mutations
#[derive(Debug, Serialize)]
pub struct ActionResponse<T: Serialize> {
    pub success: bool,
    pub message: &'static str,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> ActionResponse<T> {
    pub fn ok(message: &'static str, data: T) -> Self {
        Self {
            success: true,
            message,
            data,
        }
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Public
        .merge(health::router())
        // Public reads + admin management
        .merge(status::router())
        .merge(menu::router())
        .merge(orders::router())
        // Admin only
        .merge(merchants::router())
        .merge(session::router())
        .merge(export::router())
}

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_permissive() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

/// Build a fully configured application with all middleware
///
/// Used by the HTTP server and by router-level tests.
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    build_router()
        // ========== Tower HTTP Middleware ==========
        .layer(cors_layer(&state.config))
        .layer(CompressionLayer::new())
        // Request logging
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        // ========== Request ID ==========
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // ========== Admin session ==========
        // Runs before the routes and injects CurrentAdmin
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            crate::auth::require_auth,
        ))
}
