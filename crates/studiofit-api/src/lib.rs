//! # studiofit-api
//!
//! HTTP layer of the StudioFit backend: routing, per-request identity
//! extraction, access checks, and the resource handlers.

pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use router::build_router;
pub use state::AppState;
