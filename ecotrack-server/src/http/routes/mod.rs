//! Route handlers, one module per resource
//!
//! - auth: credential check
//! - requests: citizen submissions
//! - users: point balances
//! - bins: driver route and collection
//! - waste: staff waste logging
//! - analytics: admin dashboard reads
//! - health: liveness and database reachability

pub mod analytics;
pub mod auth;
pub mod bins;
pub mod health;
pub mod requests;
pub mod users;
pub mod waste;

use axum::Router;

use crate::state::AppState;

/// API routes: /api/*
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(requests::router())
        .merge(users::router())
        .merge(bins::router())
        .merge(waste::router())
        .merge(analytics::router())
}
