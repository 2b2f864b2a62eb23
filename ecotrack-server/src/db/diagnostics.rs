//! Database self-check
//!
//! Confirms seed users exist and that a request row can be written, without
//! awarding any points.

use sqlx::PgPool;

use super::{DbError, RequestRepo, UserRepo};
use crate::models::{NewRequest, RequestType, User};

/// Result of a diagnostic run
#[derive(Debug)]
pub struct DiagnosticReport {
    pub users: Vec<User>,
    /// `None` when the trial insert succeeded, otherwise the store's error text
    pub trial_insert_error: Option<String>,
}

impl DiagnosticReport {
    pub fn has_seed_users(&self) -> bool {
        !self.users.is_empty()
    }

    pub fn is_healthy(&self) -> bool {
        self.has_seed_users() && self.trial_insert_error.is_none()
    }
}

/// Request written by the trial insert
pub fn trial_request(user_id: i32) -> NewRequest {
    NewRequest {
        user_id: Some(user_id),
        request_type: Some(RequestType::SpecialPickup.as_str().to_owned()),
        details: Some("Debug Test".to_owned()),
    }
}

/// List users and attempt one request insert for `user_id`.
///
/// Failing to list users is an error; a failed trial insert is reported in
/// the returned report.
pub async fn run(pool: &PgPool, user_id: i32) -> Result<DiagnosticReport, DbError> {
    tracing::info!("Checking users table...");
    let users = UserRepo::new(pool).list().await?;

    if users.is_empty() {
        tracing::error!("No users found, seed data missing");
    } else {
        tracing::info!(count = users.len(), "Users found");
    }

    tracing::info!(user_id, "Attempting trial request insert");
    let trial_insert_error = match RequestRepo::new(pool).record(&trial_request(user_id)).await {
        Ok(()) => {
            tracing::info!("Insert successful");
            None
        }
        Err(e) => {
            tracing::error!(error = %e, "Trial insert failed");
            Some(e.to_string())
        }
    };

    Ok(DiagnosticReport {
        users,
        trial_insert_error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trial_request_matches_citizen_payload() {
        let req = trial_request(1);
        assert_eq!(req.user_id, Some(1));
        assert_eq!(req.request_type.as_deref(), Some("Special Pickup"));
        assert_eq!(req.details.as_deref(), Some("Debug Test"));
    }

    #[test]
    fn empty_user_table_is_unhealthy() {
        let report = DiagnosticReport {
            users: vec![],
            trial_insert_error: None,
        };
        assert!(!report.has_seed_users());
        assert!(!report.is_healthy());
    }

    #[test]
    fn failed_trial_insert_is_unhealthy() {
        let citizen = User {
            id: 1,
            username: "citizen1".into(),
            password: "password123".into(),
            role: "citizen".into(),
            green_points: 20,
        };
        let mut report = DiagnosticReport {
            users: vec![citizen],
            trial_insert_error: None,
        };
        assert!(report.is_healthy());

        report.trial_insert_error = Some("violates foreign key constraint".into());
        assert!(report.has_seed_users());
        assert!(!report.is_healthy());
    }
}
