//! One-shot database maintenance: schema init, demo reset, diagnostics
//!
//! Each command connects once; a connection failure ends the process with a
//! non-zero exit code.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use sqlx::PgPool;

use ecotrack_server::db::schema::{self, DEFAULT_SCHEMA};
use ecotrack_server::db::{connect_supervised, diagnostics, seed, ConnectPolicy};
use ecotrack_server::models::User;

use crate::config::EcotrackConfig;

/// Shared database selection
#[derive(Parser, Debug)]
pub struct DatabaseArgs {
    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

#[derive(Parser, Debug)]
pub struct InitDbArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,

    /// Schema script to run instead of the built-in one
    #[arg(long)]
    pub schema: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ResetDataArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

#[derive(Parser, Debug)]
pub struct DebugDbArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,

    /// User id for the trial request insert
    #[arg(long, default_value = "1")]
    pub user: i32,
}

async fn connect(args: DatabaseArgs, config: &EcotrackConfig) -> Result<PgPool> {
    let url = config.database_url(args.database_url);
    tracing::info!("Connecting...");
    let pool = connect_supervised(&url, ConnectPolicy::once())
        .await
        .context("Database connection failed")?;
    tracing::info!("Connected.");
    Ok(pool)
}

/// Apply the schema script batch by batch
pub async fn run_init_db(args: InitDbArgs, config: &EcotrackConfig) -> Result<()> {
    let script = match &args.schema {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read schema file: {}", path.display()))?,
        None => DEFAULT_SCHEMA.to_owned(),
    };

    let pool = connect(args.db, config).await?;
    let report = schema::apply(&pool, &script).await;
    pool.close().await;

    println!(
        "Database initialized: {} batch(es) executed, {} failed",
        report.executed, report.failed
    );
    Ok(())
}

/// Reset bins and reseed demo rows
pub async fn run_reset_data(args: ResetDataArgs, config: &EcotrackConfig) -> Result<()> {
    let pool = connect(args.db, config).await?;
    let result = seed::reset_demo_data(&pool).await;
    pool.close().await;

    let report = result.context("Demo data reset failed")?;
    println!(
        "Done! {} bin(s) reset, {} bin(s) and {} waste log(s) added.",
        report.bins_reset, report.bins_added, report.waste_logs_added
    );
    Ok(())
}

/// Check seed users and try a request insert
pub async fn run_debug_db(args: DebugDbArgs, config: &EcotrackConfig) -> Result<()> {
    let pool = connect(args.db, config).await?;
    let result = diagnostics::run(&pool, args.user).await;
    pool.close().await;

    let report = result.context("Diagnostics failed")?;
    print!("{}", render_users(&report.users));

    if report.is_healthy() {
        println!("Insert successful!");
        return Ok(());
    }

    if !report.has_seed_users() {
        bail!("CRITICAL: No users found! Seed data missing.");
    }
    bail!(
        "Trial insert for user {} failed: {}",
        args.user,
        report.trial_insert_error.unwrap_or_default()
    )
}

fn render_users(users: &[User]) -> String {
    let mut out = format!(
        "{:>4}  {:<16} {:<8} {:>6}\n",
        "id", "username", "role", "points"
    );
    for user in users {
        out.push_str(&format!(
            "{:>4}  {:<16} {:<8} {:>6}\n",
            user.id, user.username, user.role, user.green_points
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_table_has_one_line_per_user() {
        let users = vec![
            User {
                id: 1,
                username: "citizen1".into(),
                password: "password123".into(),
                role: "citizen".into(),
                green_points: 20,
            },
            User {
                id: 2,
                username: "driver1".into(),
                password: "password123".into(),
                role: "driver".into(),
                green_points: 0,
            },
        ];
        let table = render_users(&users);
        assert_eq!(table.lines().count(), 3);
        assert!(table.contains("citizen1"));
        assert!(!table.contains("password123"));
    }
}
