//! Export Handlers

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::auth::CurrentAdmin;
use crate::core::ServerState;
use crate::export::{EXPORT_FILENAME, XLSX_CONTENT_TYPE, export_database};
use crate::utils::AppResult;

/// GET /admin/export-db - 每张表一个工作表
pub async fn export_db(State(state): State<ServerState>, admin: CurrentAdmin) -> AppResult<Response> {
    let bytes = export_database(&state.pool).await?;
    tracing::info!(admin = %admin.username, "Database export downloaded");

    let disposition = format!("attachment; filename=\"{EXPORT_FILENAME}\"");
    Ok((
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}
