//! Error types for ecotrack-server startup and serving

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

/// Errors that stop the server before or while serving
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Static directory not found: {0}")]
    StaticDir(String),
}
