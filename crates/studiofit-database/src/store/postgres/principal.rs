//! Principal queries.

use async_trait::async_trait;
use uuid::Uuid;

use studiofit_core::error::{AppError, ErrorKind};
use studiofit_core::result::AppResult;
use studiofit_entity::principal::{CreatePrincipal, Principal};

use super::PostgresStore;
use crate::store::PrincipalStore;

#[async_trait]
impl PrincipalStore for PostgresStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Principal>> {
        sqlx::query_as::<_, Principal>(
            "SELECT * FROM principals WHERE LOWER(email) = LOWER($1)",
        )
        .bind(email)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find principal by email", e)
        })
    }

    async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM principals")
            .fetch_one(self.pool())
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count principals", e)
            })?;
        Ok(count as u64)
    }

    async fn create(&self, data: CreatePrincipal) -> AppResult<Principal> {
        sqlx::query_as::<_, Principal>(
            "INSERT INTO principals (email, password_hash, role) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(data.role)
        .fetch_one(self.pool())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create principal", e))
    }

    async fn update_password_hash(&self, id: Uuid, password_hash: &str) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE principals SET password_hash = $2, updated_at = now() WHERE id = $1",
        )
        .bind(id)
        .bind(password_hash)
        .execute(self.pool())
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update password hash", e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Principal not found"));
        }
        Ok(())
    }
}
