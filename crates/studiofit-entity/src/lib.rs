//! # studiofit-entity
//!
//! Domain entities for the StudioFit backend.
//!
//! ## Modules
//!
//! - `principal` — authenticating accounts and their roles
//! - `instructor` — studio instructors
//! - `trainee` — trainees supervised by an instructor
//! - `workout` — workout plans assigned to a trainee
//! - `measurement` — body measurement records of a trainee

pub mod instructor;
pub mod measurement;
pub mod principal;
pub mod trainee;
pub mod workout;

pub use instructor::Instructor;
pub use measurement::Measurement;
pub use principal::{Principal, Role};
pub use trainee::Trainee;
pub use workout::Workout;
