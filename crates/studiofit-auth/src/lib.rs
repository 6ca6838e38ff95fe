//! # studiofit-auth
//!
//! Stateless authentication and ownership-chain authorization for the
//! StudioFit backend.
//!
//! ## Modules
//!
//! - `jwt` — signed, time-bounded token creation and validation
//! - `password` — Argon2id password hashing
//! - `credential` — identifier/secret verification against the principal store
//! - `session` — login orchestration issuing role-bound tokens
//! - `identity` — the request-scoped authenticated identity value
//! - `ownership` — relationship-chain ownership resolution
//! - `access` — route rules and the per-request access decision procedure
//!
//! Tokens are self-contained: there is no revocation list and no
//! server-side session state. A token stays valid until its expiry, and a
//! role change only takes effect once outstanding tokens expire.

pub mod access;
pub mod credential;
pub mod identity;
pub mod jwt;
pub mod ownership;
pub mod password;
pub mod session;

pub use access::{AccessDecision, AccessDecisionProcedure, AccessPolicies, RouteId};
pub use credential::CredentialVerifier;
pub use identity::AuthenticatedIdentity;
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use ownership::{OwnershipResolver, ResourceKind};
pub use password::PasswordHasher;
pub use session::{LoginGrant, SessionIssuer};
