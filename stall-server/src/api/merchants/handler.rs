//! Merchant Account Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use shared::models::MerchantAccount;

use crate::api::ActionResponse;
use crate::auth::CurrentAdmin;
use crate::core::ServerState;
use crate::db::repository::{RepoError, merchant};
use crate::utils::{AppError, AppResult, ErrorCode};

#[derive(Debug, Serialize)]
pub struct MerchantData {
    merchant: MerchantAccount,
}

/// GET /admin/merchants
pub async fn list(
    State(state): State<ServerState>,
    _admin: CurrentAdmin,
) -> AppResult<Json<Vec<MerchantAccount>>> {
    let merchants = merchant::find_all(&state.pool).await?;
    Ok(Json(merchants))
}

/// PATCH /admin/merchant/{id}/activate - 设为唯一的收款账户
pub async fn activate(
    State(state): State<ServerState>,
    admin: CurrentAdmin,
    Path(id): Path<i64>,
) -> AppResult<Json<ActionResponse<MerchantData>>> {
    let merchant = merchant::activate(&state.pool, id)
        .await
        .map_err(|e| match e {
            RepoError::NotFound(_) => AppError::new(ErrorCode::MerchantNotFound),
            other => other.into(),
        })?;

    tracing::info!(
        admin = %admin.username,
        merchant_id = merchant.id,
        upi_id = %merchant.upi_id,
        "Merchant account activated"
    );

    Ok(Json(ActionResponse::ok(
        "Merchant activated successfully",
        MerchantData { merchant },
    )))
}
