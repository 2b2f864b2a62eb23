//! Users and roles

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Account role, stored as lowercase text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Citizen,
    Driver,
    Staff,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Citizen => "citizen",
            Self::Driver => "driver",
            Self::Staff => "staff",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "citizen" => Ok(Self::Citizen),
            "driver" => Ok(Self::Driver),
            "staff" => Ok(Self::Staff),
            "admin" => Ok(Self::Admin),
            other => Err(ValidationError::InvalidVariant {
                field: "role",
                value: other.to_owned(),
            }),
        }
    }
}

/// User record from database.
///
/// The password column is read for completeness but never serialized back
/// to clients.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub role: String,
    pub green_points: i32,
}

/// Body of `GET /api/users/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct PointsBalance {
    pub green_points: i32,
}

impl Default for PointsBalance {
    /// Unknown users read as zero points.
    fn default() -> Self {
        Self { green_points: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_text() {
        for role in [Role::Citizen, Role::Driver, Role::Staff, Role::Admin] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        let err = "mayor".parse::<Role>().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidVariant { field: "role", .. }));
    }

    #[test]
    fn password_is_not_serialized() {
        let user = User {
            id: 1,
            username: "alice".into(),
            password: "secret".into(),
            role: "citizen".into(),
            green_points: 20,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "username": "alice",
                "role": "citizen",
                "green_points": 20
            })
        );
    }

    #[test]
    fn missing_balance_defaults_to_zero() {
        let json = serde_json::to_value(PointsBalance::default()).unwrap();
        assert_eq!(json, serde_json::json!({ "green_points": 0 }));
    }
}
