//! HTTP server command
//!
//! Connects to the database (retrying a bounded number of times) and runs the
//! API until Ctrl+C or SIGTERM.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use ecotrack_server::db::{connect_supervised, ConnectPolicy};
use ecotrack_server::{run_server, ServerConfig};

use crate::config::EcotrackConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 0.0.0.0:3000)
    #[arg(long, short = 'b', env = "ECOTRACK_BIND")]
    pub bind: Option<SocketAddr>,

    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Directory holding the browser pages, served at /
    #[arg(long)]
    pub static_dir: Option<PathBuf>,

    /// Connection attempts before giving up
    #[arg(long)]
    pub connect_attempts: Option<u32>,

    /// Seconds to wait between connection attempts
    #[arg(long, default_value = "2")]
    pub connect_delay: u64,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config: &EcotrackConfig) -> Result<()> {
    let database_url = config.database_url(args.database_url);
    let policy = ConnectPolicy {
        attempts: args
            .connect_attempts
            .or(config.connect_attempts)
            .unwrap_or(ConnectPolicy::default().attempts),
        delay: Duration::from_secs(args.connect_delay),
        ..ConnectPolicy::default()
    };

    let pool = connect_supervised(&database_url, policy)
        .await
        .context("Database connection failed")?;

    let server_config = ServerConfig {
        bind_addr: config.bind(args.bind)?,
        static_dir: config.static_dir(args.static_dir),
    };

    run_server(pool, server_config)
        .await
        .context("Server error")?;

    Ok(())
}
