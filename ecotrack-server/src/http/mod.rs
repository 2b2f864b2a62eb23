//! HTTP server layer
//!
//! Axum server with:
//! - Open CORS (any origin)
//! - Request tracing and mutation logging
//! - Graceful shutdown
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod responses;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, ServerConfig};
