//! Auth handlers — login, logout, me.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use validator::Validate;

use studiofit_auth::access::RouteId;
use studiofit_core::error::AppError;

use crate::dto::request::LoginRequest;
use crate::dto::response::{ApiResponse, LoginResponse, MeResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::CurrentIdentity;
use crate::state::AppState;

/// Builds the session cookie: http-only, SameSite=Lax, path=/.
fn session_cookie(state: &AppState, value: String, max_age: time::Duration) -> Cookie<'static> {
    Cookie::build((state.config.auth.cookie_name.clone(), value))
        .http_only(true)
        .secure(state.config.auth.cookie_secure)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(max_age)
        .build()
}

/// POST /auth/login
///
/// On success the token is returned in the body and additionally set as
/// the session cookie with the token's own lifetime.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> ApiResult<(CookieJar, Json<ApiResponse<LoginResponse>>)> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let grant = state.session_issuer.login(&req.email, &req.password).await?;

    let ttl = time::Duration::hours(state.config.auth.token_ttl_hours as i64);
    let jar = jar.add(session_cookie(&state, grant.token.clone(), ttl));

    Ok((
        jar,
        Json(ApiResponse::ok(LoginResponse {
            token: grant.token,
            expires_at: grant.expires_at,
            role: grant.principal.role.to_string(),
        })),
    ))
}

/// GET /auth/logout
///
/// Stateless: the only server-side effect is overwriting the session
/// cookie with an empty value and zero max-age. An outstanding token
/// stays valid until its natural expiry.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> ApiResult<(CookieJar, Json<ApiResponse<MessageResponse>>)> {
    let jar = jar.add(session_cookie(&state, String::new(), time::Duration::ZERO));

    Ok((
        jar,
        Json(ApiResponse::ok(MessageResponse {
            message: "Logged out".to_string(),
        })),
    ))
}

/// GET /auth/me
pub async fn me(
    State(state): State<AppState>,
    identity: CurrentIdentity,
) -> ApiResult<Json<ApiResponse<MeResponse>>> {
    state
        .access
        .authorize(RouteId::Me, identity.get(), None)
        .await?;
    let who = identity.require()?;

    Ok(Json(ApiResponse::ok(MeResponse {
        email: who.identifier.clone(),
        role: who.role.to_string(),
    })))
}
