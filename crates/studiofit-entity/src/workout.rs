//! Workout entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A workout plan created by an instructor and assigned to a trainee.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Workout {
    /// Unique workout identifier.
    pub id: Uuid,
    /// Plan name (e.g. "Upper body A").
    pub name: String,
    /// Free-form notes or exercise prescription.
    pub notes: Option<String>,
    /// The trainee this plan is assigned to.
    pub trainee_id: Uuid,
    /// The instructor who created the plan.
    pub instructor_id: Uuid,
    /// When the plan was created.
    pub created_at: DateTime<Utc>,
    /// When the plan was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new workout plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorkout {
    /// Plan name.
    pub name: String,
    /// Free-form notes or exercise prescription.
    pub notes: Option<String>,
    /// The trainee this plan is assigned to.
    pub trainee_id: Uuid,
    /// The instructor who created the plan.
    pub instructor_id: Uuid,
}

/// Data for updating an existing workout plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateWorkout {
    /// New plan name.
    pub name: String,
    /// New notes.
    pub notes: Option<String>,
}
