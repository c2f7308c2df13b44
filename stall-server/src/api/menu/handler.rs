//! Menu Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use shared::models::{MenuItem, MenuItemAdd, MenuItemUpdate, UniversalItemView};

use crate::api::ActionResponse;
use crate::auth::CurrentAdmin;
use crate::catalog;
use crate::core::ServerState;
use crate::db::repository::menu_item;
use crate::utils::{AppJson, AppResult};

#[derive(Debug, Serialize)]
pub struct ItemData {
    item: MenuItem,
}

/// GET /menu - 在售菜品 (按分类、名称排序)
pub async fn list_available(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    let items = menu_item::find_available(&state.pool).await?;
    Ok(Json(items))
}

/// GET /admin/menu - 全部菜品
pub async fn list_all(
    State(state): State<ServerState>,
    _admin: CurrentAdmin,
) -> AppResult<Json<Vec<MenuItem>>> {
    let items = menu_item::find_all(&state.pool).await?;
    Ok(Json(items))
}

/// PATCH /admin/menu/{id} - 上下架、改价
pub async fn update(
    State(state): State<ServerState>,
    admin: CurrentAdmin,
    Path(id): Path<i64>,
    AppJson(payload): AppJson<MenuItemUpdate>,
) -> AppResult<Json<ActionResponse<ItemData>>> {
    let item = catalog::update_item(&state.pool, id, payload).await?;

    tracing::info!(
        admin = %admin.username,
        id = item.id,
        is_available = item.is_available,
        price_full = item.price_full,
        price_half = item.price_half,
        "Menu item updated"
    );

    Ok(Json(ActionResponse::ok(
        "Menu item updated successfully",
        ItemData { item },
    )))
}

/// POST /admin/menu/add - 从通用列表加入菜单
pub async fn add(
    State(state): State<ServerState>,
    _admin: CurrentAdmin,
    AppJson(payload): AppJson<MenuItemAdd>,
) -> AppResult<(StatusCode, Json<ActionResponse<ItemData>>)> {
    let item = catalog::add_from_universal(&state.pool, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ActionResponse::ok(
            "Item added to menu successfully",
            ItemData { item },
        )),
    ))
}

/// GET /admin/universal-items - 通用菜品列表 (带 in_menu 标记)
pub async fn list_universal(
    State(state): State<ServerState>,
    _admin: CurrentAdmin,
) -> AppResult<Json<Vec<UniversalItemView>>> {
    let items = catalog::list_universal(&state.pool).await?;
    Ok(Json(items))
}
