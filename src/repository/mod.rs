//! Repository layer for database operations

pub mod books;
pub mod members;

use sqlx::{Pool, Postgres};

use crate::error::AppResult;

/// Main repository struct holding the database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Round-trip to the database, used by the readiness probe
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close every pooled connection; pending acquires fail afterwards
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
