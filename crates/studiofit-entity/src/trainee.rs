//! Trainee entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A trainee enrolled at the studio.
///
/// Every trainee has exactly one supervising instructor at any time; that
/// edge is the root of all ownership chains over the trainee's workouts
/// and measurements.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Trainee {
    /// Unique trainee identifier.
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// Email, matching the trainee's principal account.
    pub email: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Whether the trainee is currently enrolled.
    pub active: bool,
    /// The supervising instructor.
    pub instructor_id: Uuid,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new trainee record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTrainee {
    /// Full name.
    pub name: String,
    /// Email, matching the trainee's principal account.
    pub email: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// The supervising instructor.
    pub instructor_id: Uuid,
}
