//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use studiofit_auth::access::AccessDecisionProcedure;
use studiofit_auth::credential::CredentialVerifier;
use studiofit_auth::jwt::{JwtDecoder, JwtEncoder};
use studiofit_auth::ownership::OwnershipResolver;
use studiofit_auth::password::PasswordHasher;
use studiofit_auth::session::SessionIssuer;
use studiofit_core::config::AppConfig;
use studiofit_database::Stores;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks; nothing here is mutable
/// after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Token validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Credential verification (also used by the change-password flow).
    pub credential_verifier: Arc<CredentialVerifier>,
    /// Password hasher.
    pub password_hasher: PasswordHasher,
    /// Login orchestration.
    pub session_issuer: Arc<SessionIssuer>,
    /// The per-request access decision procedure.
    pub access: Arc<AccessDecisionProcedure>,
    /// Record store collaborator.
    pub stores: Stores,
}

impl AppState {
    /// Assemble the full auth pipeline over the given stores.
    pub fn build(config: AppConfig, stores: Stores) -> Self {
        let password_hasher = PasswordHasher::new();
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

        let credential_verifier = Arc::new(CredentialVerifier::new(
            stores.principals.clone(),
            password_hasher.clone(),
        ));
        let session_issuer = Arc::new(SessionIssuer::new(
            credential_verifier.clone(),
            jwt_encoder,
        ));

        let resolver = Arc::new(OwnershipResolver::new(
            stores.trainees.clone(),
            stores.workouts.clone(),
            stores.measurements.clone(),
        ));
        let access = Arc::new(AccessDecisionProcedure::new(resolver));

        Self {
            config: Arc::new(config),
            jwt_decoder,
            credential_verifier,
            password_hasher,
            session_issuer,
            access,
            stores,
        }
    }
}
