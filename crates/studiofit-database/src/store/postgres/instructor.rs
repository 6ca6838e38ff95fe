//! Instructor queries.

use async_trait::async_trait;
use uuid::Uuid;

use studiofit_core::error::{AppError, ErrorKind};
use studiofit_core::result::AppResult;
use studiofit_entity::instructor::{CreateInstructor, Instructor};

use super::PostgresStore;
use crate::store::InstructorStore;

#[async_trait]
impl InstructorStore for PostgresStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Instructor>> {
        sqlx::query_as::<_, Instructor>("SELECT * FROM instructors WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find instructor by id", e)
            })
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Instructor>> {
        sqlx::query_as::<_, Instructor>(
            "SELECT * FROM instructors WHERE LOWER(email) = LOWER($1)",
        )
        .bind(email)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find instructor by email", e)
        })
    }

    async fn create(&self, data: CreateInstructor) -> AppResult<Instructor> {
        sqlx::query_as::<_, Instructor>(
            "INSERT INTO instructors (name, email, registration) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.registration)
        .fetch_one(self.pool())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create instructor", e))
    }
}
