//! The request identity extractor.
//!
//! Runs once per inbound request, before any handler. A candidate token is
//! taken from the `Authorization: Bearer` header, then from the session
//! cookie (the header wins when both are present). A valid token attaches
//! an [`AuthenticatedIdentity`] to the request extensions; a missing or
//! invalid token leaves the request anonymous — rejection is always
//! deferred to the access decision procedure, so a public route reached
//! with a garbage token still succeeds.

use axum::extract::{Request, State};
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;

use studiofit_auth::identity::AuthenticatedIdentity;

use crate::state::AppState;

/// Paths matched exactly against the public allowlist. `/auth/me` is not
/// here: it reports on the presented token, so it goes through extraction.
const PUBLIC_PATHS: &[&str] = &["/", "/home", "/health", "/auth/login", "/auth/logout"];

/// Path prefixes matched against the public allowlist.
const PUBLIC_PREFIXES: &[&str] = &["/assets/"];

/// Whether the path is on the public allowlist and skips token handling
/// entirely.
pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path) || PUBLIC_PREFIXES.iter().any(|p| path.starts_with(p))
}

/// Locates a candidate token: bearer header first, session cookie second.
fn candidate_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    if let Some(value) = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
    {
        if let Some(token) = value.strip_prefix("Bearer ") {
            if !token.is_empty() {
                return Some(token.to_string());
            }
        }
    }

    CookieJar::from_headers(headers)
        .get(cookie_name)
        .map(|cookie| cookie.value().to_string())
}

/// Middleware establishing the request-scoped identity.
///
/// Never rejects a request itself; the only effect is an
/// `AuthenticatedIdentity` extension on requests carrying a valid token.
pub async fn extract_identity(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if is_public_path(request.uri().path()) {
        return next.run(request).await;
    }

    if let Some(token) = candidate_token(request.headers(), &state.config.auth.cookie_name) {
        if let Ok(claims) = state.jwt_decoder.validate(&token) {
            request
                .extensions_mut()
                .insert(AuthenticatedIdentity::from_claims(&claims));
        }
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_public_paths() {
        assert!(is_public_path("/"));
        assert!(is_public_path("/home"));
        assert!(is_public_path("/health"));
        assert!(is_public_path("/auth/login"));
        assert!(is_public_path("/assets/app.css"));
        assert!(!is_public_path("/auth/me"));
        assert!(!is_public_path("/api/workouts"));
        assert!(!is_public_path("/homestead"));
    }

    #[test]
    fn test_header_takes_precedence_over_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer header-token"),
        );
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("studiofit_token=cookie-token"),
        );

        assert_eq!(
            candidate_token(&headers, "studiofit_token").as_deref(),
            Some("header-token")
        );
    }

    #[test]
    fn test_cookie_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("studiofit_token=cookie-token"),
        );

        assert_eq!(
            candidate_token(&headers, "studiofit_token").as_deref(),
            Some("cookie-token")
        );
    }

    #[test]
    fn test_no_candidate() {
        let headers = HeaderMap::new();
        assert!(candidate_token(&headers, "studiofit_token").is_none());
    }

    #[test]
    fn test_malformed_authorization_header_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwYXNz"),
        );
        assert!(candidate_token(&headers, "studiofit_token").is_none());
    }
}
