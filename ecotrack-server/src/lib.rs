//! ecotrack-server: HTTP API for the EcoTrack waste-management demo
//!
//! Citizens file pickup and overflow requests and earn green points, drivers
//! work through the bin route, and the admin dashboard reads aggregate
//! analytics. Every endpoint is a thin mapping onto one or two
//! parameterized PostgreSQL statements.

pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod state;

pub use error::{Result, ServerError};
pub use http::{build_router, run_server, ServerConfig};
pub use state::AppState;
