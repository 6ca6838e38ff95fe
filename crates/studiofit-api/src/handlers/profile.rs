//! Profile self-service handlers.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use studiofit_auth::access::RouteId;
use studiofit_core::error::AppError;
use studiofit_database::PrincipalStore;

use crate::dto::request::ChangePasswordRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::CurrentIdentity;
use crate::state::AppState;

/// PUT /api/profile/password
///
/// Authenticated change of one's own secret. The current secret is
/// re-verified through the credential verifier before the new hash is
/// stored, so a stolen token alone cannot rotate the password.
pub async fn change_password(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    Json(req): Json<ChangePasswordRequest>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state
        .access
        .authorize(RouteId::ChangePassword, identity.get(), None)
        .await?;
    let who = identity.require()?;

    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let principal = state
        .credential_verifier
        .verify(&who.identifier, &req.current_password)
        .await?;

    let new_hash = state.password_hasher.hash_password(&req.new_password)?;
    state
        .stores
        .principals
        .update_password_hash(principal.id, &new_hash)
        .await?;

    tracing::info!(principal = %principal.email, "Password changed");

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Password updated".to_string(),
    })))
}
