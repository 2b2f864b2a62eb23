//! User repository - credential lookup and point balances

use sqlx::PgPool;

use super::DbError;
use crate::models::{PointsBalance, User};

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Exact-match credential lookup.
    ///
    /// Passwords are stored and compared as plain text. A missing username or
    /// password binds NULL and therefore never matches.
    pub async fn find_by_credentials(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Option<User>, DbError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password, role, green_points
            FROM users
            WHERE username = $1 AND password = $2
            LIMIT 1
            "#,
        )
        .bind(username)
        .bind(password)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Current point balance, `None` if the user does not exist.
    pub async fn points(&self, id: i32) -> Result<Option<PointsBalance>, DbError> {
        let balance = sqlx::query_as::<_, PointsBalance>(
            "SELECT green_points FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(balance)
    }

    /// All users ordered by id.
    pub async fn list(&self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, username, password, role, green_points FROM users ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }
}
