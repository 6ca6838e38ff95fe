//! The request-scoped authenticated identity.

use studiofit_entity::principal::Role;

use crate::jwt::Claims;

/// Projection of a validated token for the lifetime of one request.
///
/// This value is threaded explicitly through the call chain — there is no
/// ambient security context. Each request builds its own instance, so
/// concurrent requests cannot interfere.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedIdentity {
    /// The principal's login identifier.
    pub identifier: String,
    /// The role bound into the token at issuance.
    pub role: Role,
}

impl AuthenticatedIdentity {
    /// Builds an identity from validated claims.
    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            identifier: claims.identifier().to_string(),
            role: claims.role(),
        }
    }
}

impl From<&Claims> for AuthenticatedIdentity {
    fn from(claims: &Claims) -> Self {
        Self::from_claims(claims)
    }
}
