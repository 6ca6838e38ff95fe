//! Trainee queries, including the supervision existence predicates.

use async_trait::async_trait;
use uuid::Uuid;

use studiofit_core::error::{AppError, ErrorKind};
use studiofit_core::result::AppResult;
use studiofit_entity::trainee::{CreateTrainee, Trainee};

use super::PostgresStore;
use crate::store::TraineeStore;

#[async_trait]
impl TraineeStore for PostgresStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Trainee>> {
        sqlx::query_as::<_, Trainee>("SELECT * FROM trainees WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find trainee by id", e)
            })
    }

    async fn list_all(&self) -> AppResult<Vec<Trainee>> {
        sqlx::query_as::<_, Trainee>("SELECT * FROM trainees ORDER BY name")
            .fetch_all(self.pool())
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list trainees", e))
    }

    async fn list_by_instructor_email(&self, email: &str) -> AppResult<Vec<Trainee>> {
        sqlx::query_as::<_, Trainee>(
            "SELECT t.* FROM trainees t \
             JOIN instructors i ON i.id = t.instructor_id \
             WHERE LOWER(i.email) = LOWER($1) ORDER BY t.name",
        )
        .bind(email)
        .fetch_all(self.pool())
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list trainees by instructor", e)
        })
    }

    async fn exists_supervised_by(&self, id: Uuid, instructor_email: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS ( \
                 SELECT 1 FROM trainees t \
                 JOIN instructors i ON i.id = t.instructor_id \
                 WHERE t.id = $1 AND LOWER(i.email) = LOWER($2) \
             )",
        )
        .bind(id)
        .bind(instructor_email)
        .fetch_one(self.pool())
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check trainee supervision", e)
        })
    }

    async fn exists_with_account(&self, id: Uuid, email: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS ( \
                 SELECT 1 FROM trainees WHERE id = $1 AND LOWER(email) = LOWER($2) \
             )",
        )
        .bind(id)
        .bind(email)
        .fetch_one(self.pool())
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check trainee account", e)
        })
    }

    async fn create(&self, data: CreateTrainee) -> AppResult<Trainee> {
        sqlx::query_as::<_, Trainee>(
            "INSERT INTO trainees (name, email, phone, instructor_id) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(data.instructor_id)
        .fetch_one(self.pool())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create trainee", e))
    }
}
