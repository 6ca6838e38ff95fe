//! Instructor entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A studio instructor supervising a set of trainees.
///
/// The email links the record to the instructor's principal account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Instructor {
    /// Unique instructor identifier.
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// Email, matching the instructor's principal account.
    pub email: String,
    /// Professional registration number.
    pub registration: Option<String>,
    /// Whether the instructor is active.
    pub active: bool,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new instructor record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInstructor {
    /// Full name.
    pub name: String,
    /// Email, matching the instructor's principal account.
    pub email: String,
    /// Professional registration number.
    pub registration: Option<String>,
}
