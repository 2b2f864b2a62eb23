//! Analytics repository - aggregate reads for the admin dashboard

use sqlx::PgPool;

use super::DbError;
use crate::models::{LeaderboardEntry, Role, WasteTotal, LEADERBOARD_SIZE};

/// Analytics repository
pub struct AnalyticsRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> AnalyticsRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Total logged weight per waste type.
    pub async fn efficiency(&self) -> Result<Vec<WasteTotal>, DbError> {
        let totals = sqlx::query_as::<_, WasteTotal>(
            r#"
            SELECT waste_type, SUM(weight)::float8 AS total_weight
            FROM waste_logs
            GROUP BY waste_type
            ORDER BY waste_type
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(totals)
    }

    /// Top citizens by points. Ties keep account order.
    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, DbError> {
        let entries = sqlx::query_as::<_, LeaderboardEntry>(
            r#"
            SELECT username, green_points
            FROM users
            WHERE role = $1
            ORDER BY green_points DESC, id
            LIMIT $2
            "#,
        )
        .bind(Role::Citizen.as_str())
        .bind(LEADERBOARD_SIZE)
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }
}
