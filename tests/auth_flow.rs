//! End-to-end tests for the authentication flow.

mod common;

use http::StatusCode;

use common::{PASSWORD, TestApp};

#[tokio::test]
async fn test_login_success_returns_token_and_cookie() {
    let app = TestApp::new().await;
    app.seed().await;

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({
                "email": "joao@studiofit.local",
                "password": PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["token"].as_str().is_some());
    assert_eq!(response.body["data"]["role"], "trainee");

    let cookie = response
        .headers
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .expect("login must set the session cookie");
    assert!(cookie.starts_with("studiofit_token="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Path=/"));
}

#[tokio::test]
async fn test_login_failures_are_uniform() {
    let app = TestApp::new().await;
    app.seed().await;

    let wrong_password = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({
                "email": "joao@studiofit.local",
                "password": "wrong",
            })),
            None,
        )
        .await;
    let unknown_account = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({
                "email": "nobody@studiofit.local",
                "password": PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_account.status, StatusCode::UNAUTHORIZED);
    // Identical body for both failure modes.
    assert_eq!(wrong_password.body, unknown_account.body);
}

#[tokio::test]
async fn test_me_with_and_without_token() {
    let app = TestApp::new().await;
    app.seed().await;
    let token = app.login("maria@studiofit.local", PASSWORD).await;

    let me = app.request("GET", "/auth/me", None, Some(&token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["data"]["email"], "maria@studiofit.local");
    assert_eq!(me.body["data"]["role"], "instructor");

    let anonymous = app.request("GET", "/auth/me", None, None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
    assert_eq!(anonymous.body["error"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_cookie_authenticates_when_no_header() {
    let app = TestApp::new().await;
    app.seed().await;
    let token = app.login("joao@studiofit.local", PASSWORD).await;

    let response = app
        .request_with_cookie(
            "GET",
            "/auth/me",
            &format!("studiofit_token={token}"),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["email"], "joao@studiofit.local");
}

#[tokio::test]
async fn test_header_wins_over_cookie() {
    let app = TestApp::new().await;
    app.seed().await;
    let token = app.login("maria@studiofit.local", PASSWORD).await;

    // Valid header, garbage cookie: the header token must be used.
    let response = app
        .request_with_cookie(
            "GET",
            "/auth/me",
            "studiofit_token=garbage",
            Some(&format!("Bearer {token}")),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["email"], "maria@studiofit.local");
}

#[tokio::test]
async fn test_garbage_token_is_anonymous_not_an_error() {
    let app = TestApp::new().await;
    app.seed().await;

    // Public route with a garbage token still succeeds.
    let public = app
        .request("GET", "/health", None, Some("not-a-real-token"))
        .await;
    assert_eq!(public.status, StatusCode::OK);

    // Protected route with a garbage token is rejected as unauthenticated,
    // not as a server error.
    let protected = app
        .request("GET", "/api/workouts", None, Some("not-a-real-token"))
        .await;
    assert_eq!(protected.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = TestApp::new().await;
    app.seed().await;

    let response = app.request("GET", "/auth/logout", None, None).await;
    assert_eq!(response.status, StatusCode::OK);

    let cookie = response
        .headers
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .expect("logout must overwrite the session cookie");
    assert!(cookie.starts_with("studiofit_token="));
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_change_password_requires_current_secret() {
    let app = TestApp::new().await;
    app.seed().await;
    let token = app.login("joao@studiofit.local", PASSWORD).await;

    let rejected = app
        .request(
            "PUT",
            "/api/profile/password",
            Some(serde_json::json!({
                "current_password": "wrong",
                "new_password": "a-new-password",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(rejected.status, StatusCode::UNAUTHORIZED);

    let accepted = app
        .request(
            "PUT",
            "/api/profile/password",
            Some(serde_json::json!({
                "current_password": PASSWORD,
                "new_password": "a-new-password",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(accepted.status, StatusCode::OK);

    // Old password no longer works; the new one does.
    let old = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({
                "email": "joao@studiofit.local",
                "password": PASSWORD,
            })),
            None,
        )
        .await;
    assert_eq!(old.status, StatusCode::UNAUTHORIZED);
    app.login("joao@studiofit.local", "a-new-password").await;
}

#[tokio::test]
async fn test_landing_is_public() {
    let app = TestApp::new().await;

    for path in ["/", "/home"] {
        let response = app.request("GET", path, None, None).await;
        assert_eq!(response.status, StatusCode::OK);
    }
}
