//! Login orchestration.

pub mod issuer;

pub use issuer::{LoginGrant, SessionIssuer};
