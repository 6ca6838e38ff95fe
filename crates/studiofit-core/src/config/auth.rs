//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Token lifetime in hours.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_hours: u64,
    /// Name of the session cookie carrying the token.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Whether the session cookie is marked `Secure` (HTTPS only).
    #[serde(default)]
    pub cookie_secure: bool,
    /// Whether to seed bootstrap accounts into an empty principal store.
    #[serde(default = "default_true")]
    pub bootstrap: bool,
    /// Bootstrap administrator email.
    #[serde(default = "default_bootstrap_admin")]
    pub bootstrap_admin_email: String,
    /// Bootstrap account password. Rotate or disable bootstrap in production.
    #[serde(default = "default_bootstrap_password")]
    pub bootstrap_password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_hours: default_token_ttl(),
            cookie_name: default_cookie_name(),
            cookie_secure: false,
            bootstrap: default_true(),
            bootstrap_admin_email: default_bootstrap_admin(),
            bootstrap_password: default_bootstrap_password(),
        }
    }
}

impl AuthConfig {
    /// Whether the bootstrap password is still the built-in default.
    pub fn bootstrap_password_is_default(&self) -> bool {
        self.bootstrap_password == default_bootstrap_password()
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl() -> u64 {
    24
}

fn default_cookie_name() -> String {
    "studiofit_token".to_string()
}

fn default_true() -> bool {
    true
}

fn default_bootstrap_admin() -> String {
    "admin@studiofit.local".to_string()
}

fn default_bootstrap_password() -> String {
    "studiofit-dev".to_string()
}
