//! Response DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use studiofit_entity::{Measurement, Trainee, Workout};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The session token (also delivered via the session cookie).
    pub token: String,
    /// Token expiration.
    pub expires_at: DateTime<Utc>,
    /// Role of the authenticated principal.
    pub role: String,
}

/// Identity summary for `GET /auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    /// Login identifier.
    pub email: String,
    /// Role carried by the presented token.
    pub role: String,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Trainee summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraineeResponse {
    /// Trainee ID.
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Contact phone.
    pub phone: Option<String>,
    /// Enrollment status.
    pub active: bool,
    /// Supervising instructor ID.
    pub instructor_id: Uuid,
}

impl From<Trainee> for TraineeResponse {
    fn from(t: Trainee) -> Self {
        Self {
            id: t.id,
            name: t.name,
            email: t.email,
            phone: t.phone,
            active: t.active,
            instructor_id: t.instructor_id,
        }
    }
}

/// Workout plan response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutResponse {
    /// Workout ID.
    pub id: Uuid,
    /// Plan name.
    pub name: String,
    /// Notes / prescription.
    pub notes: Option<String>,
    /// Assigned trainee.
    pub trainee_id: Uuid,
    /// Creating instructor.
    pub instructor_id: Uuid,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Last updated at.
    pub updated_at: DateTime<Utc>,
}

impl From<Workout> for WorkoutResponse {
    fn from(w: Workout) -> Self {
        Self {
            id: w.id,
            name: w.name,
            notes: w.notes,
            trainee_id: w.trainee_id,
            instructor_id: w.instructor_id,
            created_at: w.created_at,
            updated_at: w.updated_at,
        }
    }
}

/// Measurement response, with the derived BMI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementResponse {
    /// Measurement ID.
    pub id: Uuid,
    /// Owning trainee.
    pub trainee_id: Uuid,
    /// Day the measurement was taken.
    pub recorded_on: NaiveDate,
    /// Weight in kilograms.
    pub weight_kg: f64,
    /// Height in centimeters.
    pub height_cm: f64,
    /// Chest circumference in centimeters.
    pub chest_cm: Option<f64>,
    /// Waist circumference in centimeters.
    pub waist_cm: Option<f64>,
    /// Hip circumference in centimeters.
    pub hip_cm: Option<f64>,
    /// Body mass index derived from weight and height.
    pub bmi: Option<f64>,
}

impl From<Measurement> for MeasurementResponse {
    fn from(m: Measurement) -> Self {
        let bmi = m.bmi();
        Self {
            id: m.id,
            trainee_id: m.trainee_id,
            recorded_on: m.recorded_on,
            weight_kg: m.weight_kg,
            height_cm: m.height_cm,
            chest_cm: m.chest_cm,
            waist_cm: m.waist_cm,
            hip_cm: m.hip_cm,
            bmi,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
}
