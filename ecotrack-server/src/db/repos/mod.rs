//! Repository implementations for database access
//!
//! Each repository borrows the pool for the lifetime of one handler call and
//! maps one endpoint operation onto one or two parameterized statements.

pub mod analytics;
pub mod bins;
pub mod requests;
pub mod users;
pub mod waste;

pub use analytics::AnalyticsRepo;
pub use bins::BinRepo;
pub use requests::RequestRepo;
pub use users::UserRepo;
pub use waste::WasteRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),
}
