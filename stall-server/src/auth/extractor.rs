//! Admin Extractor
//!
//! Resolves the authenticated admin at the start of a handler

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::auth::CurrentAdmin;
use crate::auth::middleware::authenticate;
use crate::core::ServerState;
use crate::utils::AppError;

/// Reuses the admin injected by [`require_auth`](super::require_auth),
/// otherwise validates the session itself.
impl FromRequestParts<ServerState> for CurrentAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(admin) = parts.extensions.get::<CurrentAdmin>() {
            return Ok(admin.clone());
        }

        let admin = authenticate(&state.get_jwt_service(), &parts.headers, &parts.uri)?;

        // Store in extensions for potential reuse
        parts.extensions.insert(admin.clone());
        Ok(admin)
    }
}
