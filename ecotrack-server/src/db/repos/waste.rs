//! Waste log repository

use sqlx::PgPool;

use super::DbError;

/// Waste log repository
pub struct WasteRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> WasteRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Append a weighed waste entry. Negative or missing weights are refused
    /// by the table constraints.
    pub async fn log(&self, waste_type: Option<&str>, weight: Option<f64>) -> Result<(), DbError> {
        sqlx::query("INSERT INTO waste_logs (waste_type, weight) VALUES ($1, $2)")
            .bind(waste_type)
            .bind(weight)
            .execute(self.pool)
            .await?;

        Ok(())
    }
}
