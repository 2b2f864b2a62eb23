//! Request repository - citizen submissions and the point award

use sqlx::{PgConnection, PgPool};

use super::DbError;
use crate::models::{NewRequest, POINTS_PER_REQUEST};

/// Request repository
pub struct RequestRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> RequestRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Record a request and credit the requester.
    ///
    /// The insert and the `+10` update run in one transaction, so either both
    /// land or neither does. The update is relative, so concurrent submissions
    /// for the same user all count.
    pub async fn submit(&self, req: &NewRequest) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        insert(&mut tx, req).await?;

        let awarded = sqlx::query(
            "UPDATE users SET green_points = green_points + $1 WHERE id = $2",
        )
        .bind(POINTS_PER_REQUEST)
        .bind(req.user_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        tx.commit().await?;

        tracing::debug!(user_id = ?req.user_id, awarded, "Request recorded");
        Ok(())
    }

    /// Insert a request row without touching the requester's points.
    pub async fn record(&self, req: &NewRequest) -> Result<(), DbError> {
        let mut conn = self.pool.acquire().await?;
        insert(&mut conn, req).await
    }

    /// Number of requests filed by one user.
    pub async fn count_for_user(&self, user_id: i32) -> Result<i64, DbError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM requests WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}

async fn insert(conn: &mut PgConnection, req: &NewRequest) -> Result<(), DbError> {
    sqlx::query("INSERT INTO requests (user_id, type, details) VALUES ($1, $2, $3)")
        .bind(req.user_id)
        .bind(req.request_type.as_deref())
        .bind(req.details.as_deref())
        .execute(conn)
        .await?;

    Ok(())
}
