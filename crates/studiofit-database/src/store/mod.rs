//! Record store traits and implementations.
//!
//! The rest of the application consumes these traits as `Arc<dyn …>`.
//! Ownership checks are expressed as existence predicates: a single query
//! answering "does a row with this id exist whose owner chain ends at this
//! account email". Absence of the row and absence of ownership are both
//! `false` — callers cannot distinguish the two.

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use studiofit_core::result::AppResult;
use studiofit_entity::instructor::{CreateInstructor, Instructor};
use studiofit_entity::measurement::{CreateMeasurement, Measurement, UpdateMeasurement};
use studiofit_entity::principal::{CreatePrincipal, Principal};
use studiofit_entity::trainee::{CreateTrainee, Trainee};
use studiofit_entity::workout::{CreateWorkout, UpdateWorkout, Workout};

/// Store for authenticating accounts.
#[async_trait]
pub trait PrincipalStore: Send + Sync {
    /// Find a principal by login email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Principal>>;

    /// Count all principals.
    async fn count(&self) -> AppResult<u64>;

    /// Create a new principal.
    async fn create(&self, data: CreatePrincipal) -> AppResult<Principal>;

    /// Replace a principal's secret hash.
    async fn update_password_hash(&self, id: Uuid, password_hash: &str) -> AppResult<()>;
}

/// Store for instructor records.
#[async_trait]
pub trait InstructorStore: Send + Sync {
    /// Find an instructor by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Instructor>>;

    /// Find an instructor by account email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Instructor>>;

    /// Create a new instructor record.
    async fn create(&self, data: CreateInstructor) -> AppResult<Instructor>;
}

/// Store for trainee records.
#[async_trait]
pub trait TraineeStore: Send + Sync {
    /// Find a trainee by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Trainee>>;

    /// List all trainees.
    async fn list_all(&self) -> AppResult<Vec<Trainee>>;

    /// List the trainees supervised by the instructor with this account email.
    async fn list_by_instructor_email(&self, email: &str) -> AppResult<Vec<Trainee>>;

    /// Does trainee `id` exist with a supervising instructor whose account
    /// email is `instructor_email`?
    async fn exists_supervised_by(&self, id: Uuid, instructor_email: &str) -> AppResult<bool>;

    /// Does trainee `id` exist with its own account email equal to `email`?
    async fn exists_with_account(&self, id: Uuid, email: &str) -> AppResult<bool>;

    /// Create a new trainee record.
    async fn create(&self, data: CreateTrainee) -> AppResult<Trainee>;
}

/// Store for workout plans.
#[async_trait]
pub trait WorkoutStore: Send + Sync {
    /// Find a workout by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Workout>>;

    /// List workouts created by the instructor with this account email.
    async fn list_by_instructor_email(&self, email: &str) -> AppResult<Vec<Workout>>;

    /// List workouts assigned to the trainee with this account email.
    async fn list_by_trainee_email(&self, email: &str) -> AppResult<Vec<Workout>>;

    /// Create a new workout plan.
    async fn create(&self, data: CreateWorkout) -> AppResult<Workout>;

    /// Update an existing workout plan.
    async fn update(&self, id: Uuid, data: UpdateWorkout) -> AppResult<Option<Workout>>;

    /// Delete a workout plan. Returns whether a row was removed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// Does workout `id` exist with a creating instructor whose account
    /// email is `instructor_email`?
    async fn exists_created_by(&self, id: Uuid, instructor_email: &str) -> AppResult<bool>;

    /// Does workout `id` exist assigned to a trainee whose account email is
    /// `trainee_email`?
    async fn exists_assigned_to(&self, id: Uuid, trainee_email: &str) -> AppResult<bool>;
}

/// Store for body measurement records.
#[async_trait]
pub trait MeasurementStore: Send + Sync {
    /// Find a measurement by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Measurement>>;

    /// List a trainee's measurements. `newest_first` selects listing order;
    /// history views read oldest-first.
    async fn list_for_trainee(
        &self,
        trainee_id: Uuid,
        newest_first: bool,
    ) -> AppResult<Vec<Measurement>>;

    /// Create a new measurement record.
    async fn create(&self, data: CreateMeasurement) -> AppResult<Measurement>;

    /// Update an existing measurement record.
    async fn update(&self, id: Uuid, data: UpdateMeasurement) -> AppResult<Option<Measurement>>;

    /// Delete a measurement record. Returns whether a row was removed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// Does measurement `id` exist belonging to a trainee whose account
    /// email is `trainee_email`?
    async fn exists_owned_by(&self, id: Uuid, trainee_email: &str) -> AppResult<bool>;

    /// Does measurement `id` exist belonging to a trainee supervised by the
    /// instructor with account email `instructor_email`?
    async fn exists_supervised_by(&self, id: Uuid, instructor_email: &str) -> AppResult<bool>;
}

/// Bundle of all store trait objects, as wired into the application state.
#[derive(Clone)]
pub struct Stores {
    /// Principal accounts.
    pub principals: Arc<dyn PrincipalStore>,
    /// Instructor records.
    pub instructors: Arc<dyn InstructorStore>,
    /// Trainee records.
    pub trainees: Arc<dyn TraineeStore>,
    /// Workout plans.
    pub workouts: Arc<dyn WorkoutStore>,
    /// Measurement records.
    pub measurements: Arc<dyn MeasurementStore>,
}

impl Stores {
    /// Build the store bundle over a shared in-memory store.
    pub fn memory() -> Self {
        let store = Arc::new(memory::MemoryStore::new());
        Self {
            principals: store.clone(),
            instructors: store.clone(),
            trainees: store.clone(),
            workouts: store.clone(),
            measurements: store,
        }
    }

    /// Build the store bundle over a PostgreSQL pool.
    pub fn postgres(pool: sqlx::PgPool) -> Self {
        let store = Arc::new(postgres::PostgresStore::new(pool));
        Self {
            principals: store.clone(),
            instructors: store.clone(),
            trainees: store.clone(),
            workouts: store.clone(),
            measurements: store,
        }
    }
}

impl std::fmt::Debug for Stores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stores").finish()
    }
}
