//! Restaurant Status Handlers

use axum::{Json, extract::State};
use serde::Serialize;
use shared::models::{RestaurantStatus, RestaurantStatusUpdate};

use crate::api::ActionResponse;
use crate::auth::CurrentAdmin;
use crate::core::ServerState;
use crate::db::repository::restaurant_status;
use crate::utils::{AppJson, AppResult};

#[derive(Debug, Serialize)]
pub struct StatusData {
    status: RestaurantStatus,
}

/// GET /status - 顾客查看是否营业
pub async fn get(State(state): State<ServerState>) -> AppResult<Json<RestaurantStatus>> {
    let status = restaurant_status::get_or_create(&state.pool).await?;
    Ok(Json(status))
}

/// GET /admin/status
pub async fn admin_get(
    State(state): State<ServerState>,
    _admin: CurrentAdmin,
) -> AppResult<Json<RestaurantStatus>> {
    let status = restaurant_status::get_or_create(&state.pool).await?;
    Ok(Json(status))
}

/// PATCH /admin/status - 开店 / 暂停
pub async fn update(
    State(state): State<ServerState>,
    admin: CurrentAdmin,
    AppJson(payload): AppJson<RestaurantStatusUpdate>,
) -> AppResult<Json<ActionResponse<StatusData>>> {
    let status = restaurant_status::update(&state.pool, payload).await?;

    tracing::info!(
        admin = %admin.username,
        is_open = status.is_open,
        "Restaurant status updated"
    );

    Ok(Json(ActionResponse::ok(
        "Status updated successfully",
        StatusData { status },
    )))
}
