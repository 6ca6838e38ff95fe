//! Request DTOs with validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Password change request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    /// Current password.
    #[validate(length(min = 1))]
    pub current_password: String,
    /// New password.
    #[validate(length(min = 8))]
    pub new_password: String,
}

/// Create workout request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateWorkoutRequest {
    /// Plan name.
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    /// Free-form notes or exercise prescription.
    pub notes: Option<String>,
    /// The trainee this plan is assigned to.
    pub trainee_id: Uuid,
}

/// Update workout request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateWorkoutRequest {
    /// New plan name.
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    /// New notes.
    pub notes: Option<String>,
}

/// Create measurement request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMeasurementRequest {
    /// The trainee this measurement belongs to.
    pub trainee_id: Uuid,
    /// The day the measurement was taken.
    pub recorded_on: NaiveDate,
    /// Body weight in kilograms.
    #[validate(range(min = 1.0, max = 500.0))]
    pub weight_kg: f64,
    /// Height in centimeters.
    #[validate(range(min = 30.0, max = 260.0))]
    pub height_cm: f64,
    /// Chest circumference in centimeters.
    pub chest_cm: Option<f64>,
    /// Waist circumference in centimeters.
    pub waist_cm: Option<f64>,
    /// Hip circumference in centimeters.
    pub hip_cm: Option<f64>,
}

/// Update measurement request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateMeasurementRequest {
    /// The day the measurement was taken.
    pub recorded_on: NaiveDate,
    /// Body weight in kilograms.
    #[validate(range(min = 1.0, max = 500.0))]
    pub weight_kg: f64,
    /// Height in centimeters.
    #[validate(range(min = 30.0, max = 260.0))]
    pub height_cm: f64,
    /// Chest circumference in centimeters.
    pub chest_cm: Option<f64>,
    /// Waist circumference in centimeters.
    pub waist_cm: Option<f64>,
    /// Hip circumference in centimeters.
    pub hip_cm: Option<f64>,
}
