//! Claims carried in every session token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use studiofit_entity::principal::Role;

/// Claims payload embedded in a session token.
///
/// The accessors are pure projections: they are only meaningful on claims
/// obtained from [`JwtDecoder::validate`](super::JwtDecoder::validate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the principal's login email.
    pub sub: String,
    /// Principal role at the time of token issuance.
    pub role: Role,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// The principal's login identifier.
    pub fn identifier(&self) -> &str {
        &self.sub
    }

    /// The role bound into the token at issuance.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Issuance time as a `DateTime<Utc>`.
    pub fn issued_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.iat, 0).unwrap_or_else(Utc::now)
    }

    /// Expiration time as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }
}
