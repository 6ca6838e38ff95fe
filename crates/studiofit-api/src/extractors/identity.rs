//! `CurrentIdentity` extractor — reads the identity the middleware attached.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use studiofit_auth::identity::AuthenticatedIdentity;
use studiofit_core::error::AppError;
use studiofit_core::result::AppResult;

/// The identity established for this request, if any.
///
/// Extraction is infallible: anonymous is a legal state here. Whether an
/// anonymous request may proceed is the access decision procedure's call,
/// not the extractor's.
#[derive(Debug, Clone)]
pub struct CurrentIdentity(pub Option<AuthenticatedIdentity>);

impl CurrentIdentity {
    /// The identity as an `Option` reference, in the shape the access
    /// decision procedure takes.
    pub fn get(&self) -> Option<&AuthenticatedIdentity> {
        self.0.as_ref()
    }

    /// The identity, or an authentication error.
    ///
    /// For handlers that need the identity's identifier after
    /// authorization has already passed.
    pub fn require(&self) -> AppResult<&AuthenticatedIdentity> {
        self.0
            .as_ref()
            .ok_or_else(|| AppError::authentication("Authentication required"))
    }
}

impl<S> FromRequestParts<S> for CurrentIdentity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(parts.extensions.get::<AuthenticatedIdentity>().cloned()))
    }
}
