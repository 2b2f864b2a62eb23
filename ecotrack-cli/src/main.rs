//! ecotrack CLI - EcoTrack waste-management server and role clients
//!
//! This is the main entry point for the ecotrack command-line tool, which provides:
//! - The HTTP API server (`serve`)
//! - Database maintenance (`init-db`, `reset-data`, `debug-db`)
//! - Polling clients for each role (`citizen`, `driver`, `staff`, `admin`)

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

use commands::admin::AdminArgs;
use commands::citizen::CitizenArgs;
use commands::driver::DriverArgs;
use commands::login::LoginArgs;
use commands::maintenance::{DebugDbArgs, InitDbArgs, ResetDataArgs};
use commands::serve::ServeArgs;
use commands::staff::StaffArgs;
use config::EcotrackConfig;

#[derive(Parser, Debug)]
#[command(
    name = "ecotrack",
    author,
    version,
    about = "EcoTrack municipal waste management: API server and role clients"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(ServeArgs),
    /// Create tables and seed accounts from the schema script
    InitDb(InitDbArgs),
    /// Replace bins and waste logs with the demo set
    ResetData(ResetDataArgs),
    /// Check seed users and try a request insert
    DebugDb(DebugDbArgs),
    /// Check credentials against the API
    Login(LoginArgs),
    /// Citizen view: green points, pickups, overflow reports
    Citizen(CitizenArgs),
    /// Driver view: prioritized route and collections
    Driver(DriverArgs),
    /// Staff view: waste logging
    Staff(StaffArgs),
    /// Admin view: analytics dashboard
    Admin(AdminArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    let config = EcotrackConfig::load()?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args, &config).await,
        Commands::InitDb(args) => commands::run_init_db(args, &config).await,
        Commands::ResetData(args) => commands::run_reset_data(args, &config).await,
        Commands::DebugDb(args) => commands::run_debug_db(args, &config).await,
        Commands::Login(args) => commands::run_login(args, &config).await,
        Commands::Citizen(args) => commands::run_citizen(args, &config).await,
        Commands::Driver(args) => commands::run_driver(args, &config).await,
        Commands::Staff(args) => commands::run_staff(args, &config).await,
        Commands::Admin(args) => commands::run_admin(args, &config).await,
    }
}
