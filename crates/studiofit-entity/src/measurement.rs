//! Body measurement entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A body measurement record taken for a trainee.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Measurement {
    /// Unique measurement identifier.
    pub id: Uuid,
    /// The trainee this measurement belongs to.
    pub trainee_id: Uuid,
    /// The day the measurement was taken.
    pub recorded_on: NaiveDate,
    /// Body weight in kilograms.
    pub weight_kg: f64,
    /// Height in centimeters.
    pub height_cm: f64,
    /// Chest circumference in centimeters.
    pub chest_cm: Option<f64>,
    /// Waist circumference in centimeters.
    pub waist_cm: Option<f64>,
    /// Hip circumference in centimeters.
    pub hip_cm: Option<f64>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl Measurement {
    /// Body mass index derived from weight and height.
    ///
    /// Returns `None` when height is not positive.
    pub fn bmi(&self) -> Option<f64> {
        if self.height_cm <= 0.0 {
            return None;
        }
        let height_m = self.height_cm / 100.0;
        Some(self.weight_kg / (height_m * height_m))
    }
}

/// Data required to create a new measurement record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMeasurement {
    /// The trainee this measurement belongs to.
    pub trainee_id: Uuid,
    /// The day the measurement was taken.
    pub recorded_on: NaiveDate,
    /// Body weight in kilograms.
    pub weight_kg: f64,
    /// Height in centimeters.
    pub height_cm: f64,
    /// Chest circumference in centimeters.
    pub chest_cm: Option<f64>,
    /// Waist circumference in centimeters.
    pub waist_cm: Option<f64>,
    /// Hip circumference in centimeters.
    pub hip_cm: Option<f64>,
}

/// Data for updating an existing measurement record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMeasurement {
    /// The day the measurement was taken.
    pub recorded_on: NaiveDate,
    /// Body weight in kilograms.
    pub weight_kg: f64,
    /// Height in centimeters.
    pub height_cm: f64,
    /// Chest circumference in centimeters.
    pub chest_cm: Option<f64>,
    /// Waist circumference in centimeters.
    pub waist_cm: Option<f64>,
    /// Hip circumference in centimeters.
    pub hip_cm: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(weight_kg: f64, height_cm: f64) -> Measurement {
        Measurement {
            id: Uuid::new_v4(),
            trainee_id: Uuid::new_v4(),
            recorded_on: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            weight_kg,
            height_cm,
            chest_cm: None,
            waist_cm: None,
            hip_cm: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_bmi() {
        let m = sample(80.0, 200.0);
        assert!((m.bmi().unwrap() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_bmi_zero_height() {
        assert!(sample(80.0, 0.0).bmi().is_none());
    }
}
