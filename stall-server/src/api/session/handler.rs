//! Admin Session Handlers
//!
//! Login issues a JWT and sets it as an HttpOnly cookie; API clients may send
//! the same token as `Authorization: Bearer`.

use std::time::Duration;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, header},
};
use serde::Serialize;
use shared::models::{AdminProfile, LoginRequest};

use crate::auth::{CurrentAdmin, SESSION_COOKIE, verify_password};
use crate::core::ServerState;
use crate::db::repository::admin_user;
use crate::security_log;
use crate::utils::{AppError, AppJson, AppResult};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 200;

const DEFAULT_USERNAME: &str = "admin";

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    success: bool,
    message: &'static str,
    admin: AdminProfile,
    token: String,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    success: bool,
    message: &'static str,
}

fn session_cookie(value: &str, max_age: i64, secure: bool) -> AppResult<HeaderValue> {
    let mut cookie =
        format!("{SESSION_COOKIE}={value}; HttpOnly; Path=/; SameSite=Lax; Max-Age={max_age}");
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
        .map_err(|e| AppError::internal(format!("Invalid session cookie: {e}")))
}

/// POST /admin/login
pub async fn login(
    State(state): State<ServerState>,
    AppJson(req): AppJson<LoginRequest>,
) -> AppResult<(HeaderMap, Json<LoginResponse>)> {
    let Some(password) = req.password.filter(|p| !p.is_empty()) else {
        return Err(AppError::required("Password required"));
    };
    let username = req
        .username
        .filter(|u| !u.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_USERNAME.to_string());

    let user = admin_user::find_by_username(&state.pool, &username).await?;

    // Fixed delay before checking the result
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Same error for unknown user and wrong password
    let user = match user {
        Some(user) if verify_password(&password, &user.password_hash) => user,
        found => {
            let reason = if found.is_some() {
                "invalid_password"
            } else {
                "user_not_found"
            };
            security_log!(
                "WARN",
                "login_failed",
                username = username.as_str(),
                reason = reason
            );
            return Err(AppError::invalid_credentials());
        }
    };

    let jwt_service = state.get_jwt_service();
    let token = jwt_service
        .generate_token(user.id, &user.username)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::SET_COOKIE,
        session_cookie(
            &token,
            jwt_service.max_age_seconds(),
            state.config.is_production(),
        )?,
    );

    tracing::info!(admin_id = user.id, username = %user.username, "Admin logged in");

    Ok((
        headers,
        Json(LoginResponse {
            success: true,
            message: "Login successful",
            admin: AdminProfile::from(&user),
            token,
        }),
    ))
}

/// POST /admin/logout - 清除会话 Cookie
pub async fn logout(
    State(state): State<ServerState>,
    admin: CurrentAdmin,
) -> AppResult<(HeaderMap, Json<LogoutResponse>)> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::SET_COOKIE,
        session_cookie("", 0, state.config.is_production())?,
    );

    tracing::info!(admin_id = admin.id, username = %admin.username, "Admin logged out");

    Ok((
        headers,
        Json(LogoutResponse {
            success: true,
            message: "Logout successful",
        }),
    ))
}

/// GET /admin/me
pub async fn me(admin: CurrentAdmin) -> Json<AdminProfile> {
    Json(AdminProfile {
        id: admin.id,
        username: admin.username,
    })
}
