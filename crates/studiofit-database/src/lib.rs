//! # studiofit-database
//!
//! The record store collaborator for StudioFit.
//!
//! ## Modules
//!
//! - `store` — store traits plus PostgreSQL and in-memory implementations
//! - `connection` — PostgreSQL connection pool management
//! - `migration` — migration runner

pub mod connection;
pub mod migration;
pub mod store;

pub use connection::DatabasePool;
pub use store::memory::MemoryStore;
pub use store::postgres::PostgresStore;
pub use store::{
    InstructorStore, MeasurementStore, PrincipalStore, Stores, TraineeStore, WorkoutStore,
};
