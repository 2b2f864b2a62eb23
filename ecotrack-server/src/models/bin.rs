//! Collection bins

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Pickup status of a bin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinStatus {
    Pending,
    Collected,
}

impl BinStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Collected => "Collected",
        }
    }
}

impl fmt::Display for BinStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BinStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Collected" => Ok(Self::Collected),
            other => Err(ValidationError::InvalidVariant {
                field: "status",
                value: other.to_owned(),
            }),
        }
    }
}

/// Fill level of a bin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinLevel {
    Normal,
    Overflowing,
}

impl BinLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Overflowing => "Overflowing",
        }
    }
}

impl fmt::Display for BinLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BinLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Normal" => Ok(Self::Normal),
            "Overflowing" => Ok(Self::Overflowing),
            other => Err(ValidationError::InvalidVariant {
                field: "level",
                value: other.to_owned(),
            }),
        }
    }
}

/// Bin record from database
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Bin {
    pub id: i32,
    pub location: String,
    pub zone: String,
    pub status: String,
    pub level: String,
    pub last_collected: Option<DateTime<Utc>>,
}

impl Bin {
    pub fn is_overflowing(&self) -> bool {
        self.level == BinLevel::Overflowing.as_str()
    }

    pub fn is_collected(&self) -> bool {
        self.status == BinStatus::Collected.as_str()
    }
}
