//! Bin repository - driver route and collection

use sqlx::PgPool;

use super::DbError;
use crate::models::{Bin, BinLevel, BinStatus};

/// Bin repository
pub struct BinRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> BinRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All bins in route order: overflowing first, then by ascending id.
    pub async fn list_for_route(&self) -> Result<Vec<Bin>, DbError> {
        let bins = sqlx::query_as::<_, Bin>(
            r#"
            SELECT id, location, zone, status, level, last_collected
            FROM bins
            ORDER BY CASE WHEN level = $1 THEN 1 ELSE 2 END, id
            "#,
        )
        .bind(BinLevel::Overflowing.as_str())
        .fetch_all(self.pool)
        .await?;

        Ok(bins)
    }

    /// Mark a bin collected and emptied.
    ///
    /// Repeating the call leaves the bin in the same state, with a fresh
    /// `last_collected`. Returns the number of rows touched (0 for an unknown id).
    pub async fn collect(&self, id: i32) -> Result<u64, DbError> {
        let result = sqlx::query(
            r#"
            UPDATE bins
            SET status = $1, level = $2, last_collected = NOW()
            WHERE id = $3
            "#,
        )
        .bind(BinStatus::Collected.as_str())
        .bind(BinLevel::Normal.as_str())
        .bind(id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Put every bin back on the route.
    pub async fn reset_all_pending(&self) -> Result<u64, DbError> {
        let result = sqlx::query("UPDATE bins SET status = $1")
            .bind(BinStatus::Pending.as_str())
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Add a bin, returning its id.
    pub async fn insert(
        &self,
        location: &str,
        zone: &str,
        status: BinStatus,
        level: BinLevel,
    ) -> Result<i32, DbError> {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO bins (location, zone, status, level)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(location)
        .bind(zone)
        .bind(status.as_str())
        .bind(level.as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }
}
