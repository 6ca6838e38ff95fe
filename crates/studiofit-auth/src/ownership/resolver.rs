//! Resolves whether an identity owns or supervises a resource.

use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

use studiofit_core::result::AppResult;
use studiofit_database::{MeasurementStore, TraineeStore, WorkoutStore};
use studiofit_entity::principal::Role;

use crate::identity::AuthenticatedIdentity;

/// The kinds of resources guarded by ownership chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// A trainee record.
    Trainee,
    /// A workout plan.
    Workout,
    /// A body measurement record.
    Measurement,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trainee => write!(f, "trainee"),
            Self::Workout => write!(f, "workout"),
            Self::Measurement => write!(f, "measurement"),
        }
    }
}

/// Walks the relationship chain behind each (role, resource kind) pair.
///
/// Every check is a single existence predicate on the record store. A
/// missing resource and a resource owned by someone else both resolve to
/// `false`; callers cannot tell the two apart.
#[derive(Clone)]
pub struct OwnershipResolver {
    /// Trainee records and their supervision edge.
    trainees: Arc<dyn TraineeStore>,
    /// Workout plans and their creator/assignee edges.
    workouts: Arc<dyn WorkoutStore>,
    /// Measurements and their trainee edge.
    measurements: Arc<dyn MeasurementStore>,
}

impl std::fmt::Debug for OwnershipResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OwnershipResolver").finish()
    }
}

impl OwnershipResolver {
    /// Creates a new resolver over the record store.
    pub fn new(
        trainees: Arc<dyn TraineeStore>,
        workouts: Arc<dyn WorkoutStore>,
        measurements: Arc<dyn MeasurementStore>,
    ) -> Self {
        Self {
            trainees,
            workouts,
            measurements,
        }
    }

    /// Whether the identity owns or supervises the given resource.
    ///
    /// An instructor's authority is always resolved by following the
    /// trainee edge; it is never stored redundantly. Role/kind pairs with
    /// no defined chain (staff roles included) resolve to `false` — staff
    /// bypass lives in the access rules, not here.
    pub async fn owns(
        &self,
        identity: &AuthenticatedIdentity,
        kind: ResourceKind,
        resource_id: Uuid,
    ) -> AppResult<bool> {
        let email = identity.identifier.as_str();
        match (identity.role, kind) {
            (Role::Instructor, ResourceKind::Trainee) => {
                self.trainees.exists_supervised_by(resource_id, email).await
            }
            (Role::Trainee, ResourceKind::Trainee) => {
                self.trainees.exists_with_account(resource_id, email).await
            }
            (Role::Instructor, ResourceKind::Workout) => {
                self.workouts.exists_created_by(resource_id, email).await
            }
            (Role::Trainee, ResourceKind::Workout) => {
                self.workouts.exists_assigned_to(resource_id, email).await
            }
            (Role::Instructor, ResourceKind::Measurement) => {
                self.measurements
                    .exists_supervised_by(resource_id, email)
                    .await
            }
            (Role::Trainee, ResourceKind::Measurement) => {
                self.measurements.exists_owned_by(resource_id, email).await
            }
            _ => Ok(false),
        }
    }
}
