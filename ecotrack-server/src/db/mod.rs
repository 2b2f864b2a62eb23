//! Database layer - connection pool, repositories, and maintenance routines
//!
//! # Design Principles
//!
//! - One pool per process, owned by the caller and passed in explicitly
//! - Every query is parameterized; no string-built SQL
//! - Transactions for multi-step operations
//! - Constraint checking is left to the store

pub mod diagnostics;
pub mod pool;
pub mod repos;
pub mod schema;
pub mod seed;

pub use pool::{connect_supervised, create_pool, create_pool_with_options, ping, ConnectPolicy};
pub use repos::*;
