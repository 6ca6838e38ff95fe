//! PostgreSQL record store.
//!
//! One implementation struct carries all five store traits; each entity's
//! queries live in its own file.

mod instructor;
mod measurement;
mod principal;
mod trainee;
mod workout;

use sqlx::PgPool;

/// PostgreSQL-backed record store.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    /// Shared connection pool.
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new store over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Return a reference to the underlying pool.
    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }
}
