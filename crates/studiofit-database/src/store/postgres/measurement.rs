//! Measurement queries, including the two-hop ownership predicates.

use async_trait::async_trait;
use uuid::Uuid;

use studiofit_core::error::{AppError, ErrorKind};
use studiofit_core::result::AppResult;
use studiofit_entity::measurement::{CreateMeasurement, Measurement, UpdateMeasurement};

use super::PostgresStore;
use crate::store::MeasurementStore;

#[async_trait]
impl MeasurementStore for PostgresStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Measurement>> {
        sqlx::query_as::<_, Measurement>("SELECT * FROM measurements WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find measurement by id", e)
            })
    }

    async fn list_for_trainee(
        &self,
        trainee_id: Uuid,
        newest_first: bool,
    ) -> AppResult<Vec<Measurement>> {
        let query = if newest_first {
            "SELECT * FROM measurements WHERE trainee_id = $1 ORDER BY recorded_on DESC"
        } else {
            "SELECT * FROM measurements WHERE trainee_id = $1 ORDER BY recorded_on ASC"
        };
        sqlx::query_as::<_, Measurement>(query)
            .bind(trainee_id)
            .fetch_all(self.pool())
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list measurements", e)
            })
    }

    async fn create(&self, data: CreateMeasurement) -> AppResult<Measurement> {
        sqlx::query_as::<_, Measurement>(
            "INSERT INTO measurements \
                 (trainee_id, recorded_on, weight_kg, height_cm, chest_cm, waist_cm, hip_cm) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(data.trainee_id)
        .bind(data.recorded_on)
        .bind(data.weight_kg)
        .bind(data.height_cm)
        .bind(data.chest_cm)
        .bind(data.waist_cm)
        .bind(data.hip_cm)
        .fetch_one(self.pool())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create measurement", e))
    }

    async fn update(&self, id: Uuid, data: UpdateMeasurement) -> AppResult<Option<Measurement>> {
        sqlx::query_as::<_, Measurement>(
            "UPDATE measurements SET recorded_on = $2, weight_kg = $3, height_cm = $4, \
                 chest_cm = $5, waist_cm = $6, hip_cm = $7 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(data.recorded_on)
        .bind(data.weight_kg)
        .bind(data.height_cm)
        .bind(data.chest_cm)
        .bind(data.waist_cm)
        .bind(data.hip_cm)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update measurement", e))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM measurements WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete measurement", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn exists_owned_by(&self, id: Uuid, trainee_email: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS ( \
                 SELECT 1 FROM measurements m \
                 JOIN trainees t ON t.id = m.trainee_id \
                 WHERE m.id = $1 AND LOWER(t.email) = LOWER($2) \
             )",
        )
        .bind(id)
        .bind(trainee_email)
        .fetch_one(self.pool())
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check measurement owner", e)
        })
    }

    async fn exists_supervised_by(&self, id: Uuid, instructor_email: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS ( \
                 SELECT 1 FROM measurements m \
                 JOIN trainees t ON t.id = m.trainee_id \
                 JOIN instructors i ON i.id = t.instructor_id \
                 WHERE m.id = $1 AND LOWER(i.email) = LOWER($2) \
             )",
        )
        .bind(id)
        .bind(instructor_email)
        .fetch_one(self.pool())
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to check measurement supervision",
                e,
            )
        })
    }
}
