//! 认证中间件
//!
//! 保护 `/admin` 下的接口 (登录除外)

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use http::HeaderMap;

use crate::auth::{CurrentAdmin, JwtError, JwtService};
use crate::core::ServerState;
use crate::security_log;
use crate::utils::AppError;

/// 会话 Cookie 名称
pub const SESSION_COOKIE: &str = "stall_session";

/// 不需要登录的路径
///
/// - 所有非 `/admin` 路径 (顾客接口、健康检查)
/// - `/admin/login`
pub fn is_public_path(path: &str) -> bool {
    let is_admin = path == "/admin" || path.starts_with("/admin/");
    !is_admin || path == "/admin/login"
}

/// 从 `Authorization: Bearer` 头或会话 Cookie 中取出令牌
///
/// Bearer 头优先。
pub fn session_token(headers: &HeaderMap) -> Option<&str> {
    if let Some(token) = headers
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(JwtService::extract_from_header)
    {
        return Some(token);
    }

    headers
        .get_all(http::header::COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|h| h.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value)
}

/// 校验令牌并解析出当前管理员
pub fn authenticate(
    jwt_service: &JwtService,
    headers: &HeaderMap,
    uri: &http::Uri,
) -> Result<CurrentAdmin, AppError> {
    let Some(token) = session_token(headers) else {
        security_log!("WARN", "auth_missing", uri = format!("{:?}", uri));
        return Err(AppError::not_authenticated());
    };

    match jwt_service
        .validate_token(token)
        .and_then(CurrentAdmin::try_from)
    {
        Ok(admin) => Ok(admin),
        Err(e) => {
            security_log!(
                "WARN",
                "auth_failed",
                error = format!("{}", e),
                uri = format!("{:?}", uri)
            );
            match e {
                JwtError::ExpiredToken => Err(AppError::token_expired()),
                _ => Err(AppError::invalid_token("Invalid session token")),
            }
        }
    }
}

/// 认证中间件 - 要求管理员登录
///
/// 验证成功后将 [`CurrentAdmin`] 注入请求扩展。
///
/// # 错误处理
///
/// | 错误 | HTTP 状态码 |
/// |------|------------|
/// | 无令牌 | 401 NotAuthenticated |
/// | 令牌过期 | 401 TokenExpired |
/// | 无效令牌 | 401 TokenInvalid |
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // 允许 CORS 预检的 OPTIONS 请求
    if req.method() == http::Method::OPTIONS || is_public_path(req.uri().path()) {
        return Ok(next.run(req).await);
    }

    let admin = authenticate(&state.get_jwt_service(), req.headers(), req.uri())?;
    req.extensions_mut().insert(admin);
    Ok(next.run(req).await)
}
