//! Domain models for the EcoTrack store
//!
//! Row types mirror the four tables one-to-one. Enumerated columns are stored
//! as text; the enums here give those values names on the Rust side without
//! rejecting rows the store accepted.

pub mod analytics;
pub mod bin;
pub mod request;
pub mod user;
pub mod validation;
pub mod waste;

pub use analytics::{monthly_trends, LeaderboardEntry, TrendPoint, LEADERBOARD_SIZE, MONTHLY_TRENDS};
pub use bin::{Bin, BinLevel, BinStatus};
pub use request::{NewRequest, RequestType, POINTS_PER_REQUEST};
pub use user::{PointsBalance, Role, User};
pub use validation::ValidationError;
pub use waste::{NewWasteLog, WasteTotal};
