//! Workout queries, including the creation/assignment existence predicates.

use async_trait::async_trait;
use uuid::Uuid;

use studiofit_core::error::{AppError, ErrorKind};
use studiofit_core::result::AppResult;
use studiofit_entity::workout::{CreateWorkout, UpdateWorkout, Workout};

use super::PostgresStore;
use crate::store::WorkoutStore;

#[async_trait]
impl WorkoutStore for PostgresStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Workout>> {
        sqlx::query_as::<_, Workout>("SELECT * FROM workouts WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find workout by id", e)
            })
    }

    async fn list_by_instructor_email(&self, email: &str) -> AppResult<Vec<Workout>> {
        sqlx::query_as::<_, Workout>(
            "SELECT w.* FROM workouts w \
             JOIN instructors i ON i.id = w.instructor_id \
             WHERE LOWER(i.email) = LOWER($1) ORDER BY w.created_at",
        )
        .bind(email)
        .fetch_all(self.pool())
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list workouts by instructor", e)
        })
    }

    async fn list_by_trainee_email(&self, email: &str) -> AppResult<Vec<Workout>> {
        sqlx::query_as::<_, Workout>(
            "SELECT w.* FROM workouts w \
             JOIN trainees t ON t.id = w.trainee_id \
             WHERE LOWER(t.email) = LOWER($1) ORDER BY w.created_at",
        )
        .bind(email)
        .fetch_all(self.pool())
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list workouts by trainee", e)
        })
    }

    async fn create(&self, data: CreateWorkout) -> AppResult<Workout> {
        sqlx::query_as::<_, Workout>(
            "INSERT INTO workouts (name, notes, trainee_id, instructor_id) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.notes)
        .bind(data.trainee_id)
        .bind(data.instructor_id)
        .fetch_one(self.pool())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create workout", e))
    }

    async fn update(&self, id: Uuid, data: UpdateWorkout) -> AppResult<Option<Workout>> {
        sqlx::query_as::<_, Workout>(
            "UPDATE workouts SET name = $2, notes = $3, updated_at = now() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.notes)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update workout", e))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete workout", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn exists_created_by(&self, id: Uuid, instructor_email: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS ( \
                 SELECT 1 FROM workouts w \
                 JOIN instructors i ON i.id = w.instructor_id \
                 WHERE w.id = $1 AND LOWER(i.email) = LOWER($2) \
             )",
        )
        .bind(id)
        .bind(instructor_email)
        .fetch_one(self.pool())
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check workout creator", e)
        })
    }

    async fn exists_assigned_to(&self, id: Uuid, trainee_email: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS ( \
                 SELECT 1 FROM workouts w \
                 JOIN trainees t ON t.id = w.trainee_id \
                 WHERE w.id = $1 AND LOWER(t.email) = LOWER($2) \
             )",
        )
        .bind(id)
        .bind(trainee_email)
        .fetch_one(self.pool())
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check workout assignment", e)
        })
    }
}
