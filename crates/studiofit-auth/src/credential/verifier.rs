//! Identifier/secret verification against the principal store.

use std::sync::Arc;

use studiofit_core::error::AppError;
use studiofit_core::result::AppResult;
use studiofit_database::PrincipalStore;
use studiofit_entity::principal::Principal;

use crate::password::PasswordHasher;

/// The single caller-visible message for every login failure. An unknown
/// identifier and a wrong secret are indistinguishable, so the endpoint
/// cannot be used to enumerate accounts.
const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Validates identifier/secret pairs against the principal store.
#[derive(Clone)]
pub struct CredentialVerifier {
    /// Principal lookup.
    principals: Arc<dyn PrincipalStore>,
    /// Argon2 verification.
    hasher: PasswordHasher,
}

impl std::fmt::Debug for CredentialVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialVerifier").finish()
    }
}

impl CredentialVerifier {
    /// Creates a new verifier over the given principal store.
    pub fn new(principals: Arc<dyn PrincipalStore>, hasher: PasswordHasher) -> Self {
        Self { principals, hasher }
    }

    /// Verifies a plaintext identifier/secret pair.
    ///
    /// Returns the matching principal, or the uniform rejection when the
    /// identifier is unknown or the secret does not match.
    pub async fn verify(&self, identifier: &str, secret: &str) -> AppResult<Principal> {
        let Some(principal) = self.principals.find_by_email(identifier).await? else {
            return Err(Self::rejection());
        };

        if self.hasher.verify_password(secret, &principal.password_hash)? {
            Ok(principal)
        } else {
            Err(Self::rejection())
        }
    }

    /// The uniform login failure value.
    fn rejection() -> AppError {
        AppError::authentication(INVALID_CREDENTIALS)
    }
}

#[cfg(test)]
mod tests {
    use studiofit_database::MemoryStore;
    use studiofit_entity::principal::{CreatePrincipal, Role};

    use super::*;

    async fn verifier_with_account() -> CredentialVerifier {
        let store = Arc::new(MemoryStore::new());
        let hasher = PasswordHasher::new();
        store
            .create(CreatePrincipal {
                email: "maria@studiofit.local".to_string(),
                password_hash: hasher.hash_password("s3cret-pass").unwrap(),
                role: Role::Instructor,
            })
            .await
            .unwrap();
        CredentialVerifier::new(store, hasher)
    }

    #[tokio::test]
    async fn test_correct_credentials() {
        let verifier = verifier_with_account().await;
        let principal = verifier
            .verify("maria@studiofit.local", "s3cret-pass")
            .await
            .unwrap();
        assert_eq!(principal.role, Role::Instructor);
    }

    #[tokio::test]
    async fn test_unknown_identifier_and_wrong_secret_are_indistinguishable() {
        let verifier = verifier_with_account().await;

        let unknown = verifier
            .verify("nobody@studiofit.local", "s3cret-pass")
            .await
            .unwrap_err();
        let wrong = verifier
            .verify("maria@studiofit.local", "wrong-pass")
            .await
            .unwrap_err();

        assert_eq!(unknown.to_string(), wrong.to_string());
        assert_eq!(unknown.kind, wrong.kind);
    }
}
