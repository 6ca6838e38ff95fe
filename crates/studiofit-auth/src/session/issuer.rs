//! Session issuance — the login flow.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use studiofit_core::result::AppResult;
use studiofit_entity::principal::Principal;

use crate::credential::CredentialVerifier;
use crate::jwt::JwtEncoder;

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginGrant {
    /// The signed session token.
    pub token: String,
    /// Issuance timestamp.
    pub issued_at: DateTime<Utc>,
    /// Expiration timestamp.
    pub expires_at: DateTime<Utc>,
    /// The authenticated principal.
    pub principal: Principal,
}

/// Orchestrates credential verification and token issuance.
///
/// This is the only point where a role is bound into a credential: a role
/// change after issuance does not affect outstanding tokens until they
/// expire.
#[derive(Debug, Clone)]
pub struct SessionIssuer {
    /// Credential verification.
    verifier: Arc<CredentialVerifier>,
    /// Token creation.
    encoder: Arc<JwtEncoder>,
}

impl SessionIssuer {
    /// Creates a new session issuer.
    pub fn new(verifier: Arc<CredentialVerifier>, encoder: Arc<JwtEncoder>) -> Self {
        Self { verifier, encoder }
    }

    /// Performs the login flow: verify credentials, then issue a token
    /// carrying the principal's current role.
    pub async fn login(&self, identifier: &str, secret: &str) -> AppResult<LoginGrant> {
        let principal = self.verifier.verify(identifier, secret).await?;
        let issued = self.encoder.issue(&principal.email, principal.role)?;

        info!(
            principal = %principal.email,
            role = %principal.role,
            expires_at = %issued.expires_at,
            "Login succeeded"
        );

        Ok(LoginGrant {
            token: issued.token,
            issued_at: issued.issued_at,
            expires_at: issued.expires_at,
            principal,
        })
    }
}
