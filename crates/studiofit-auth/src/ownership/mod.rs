//! Ownership-chain resolution.

pub mod resolver;

pub use resolver::{OwnershipResolver, ResourceKind};
