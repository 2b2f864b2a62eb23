//! Driver commands - route list and bin collection

use anyhow::Result;
use clap::{Parser, Subcommand};

use ecotrack_server::http::responses::Ack;
use ecotrack_server::models::Bin;

use super::client::{expect_success, poll, print_json, ApiClient, ClientOpts, DRIVER_REFRESH};
use crate::config::EcotrackConfig;

#[derive(Parser, Debug)]
pub struct DriverArgs {
    #[command(flatten)]
    pub client: ClientOpts,

    #[command(subcommand)]
    pub command: DriverCommands,
}

#[derive(Subcommand, Debug)]
pub enum DriverCommands {
    /// Show the bin route, overflowing bins first
    Route(RouteArgs),
    /// Mark a bin as collected
    Collect(CollectArgs),
}

#[derive(Parser, Debug)]
pub struct RouteArgs {
    /// Keep refreshing every 5 seconds
    #[arg(long, short)]
    pub watch: bool,
}

#[derive(Parser, Debug)]
pub struct CollectArgs {
    /// Bin id
    pub id: i32,
}

pub async fn run_driver(args: DriverArgs, config: &EcotrackConfig) -> Result<()> {
    let client = ApiClient::from_opts(&args.client, config)?;
    let json = args.client.json;

    match args.command {
        DriverCommands::Route(route) if route.watch => {
            poll(DRIVER_REFRESH, || show_route(&client, json)).await
        }
        DriverCommands::Route(_) => show_route(&client, json).await,
        DriverCommands::Collect(collect) => {
            let ack: Ack = client
                .post(&format!("bins/{}/collect", collect.id), &serde_json::json!({}))
                .await?;
            let ack = expect_success(ack)?;
            if json {
                print_json(&ack)
            } else {
                println!("Bin #{} collected", collect.id);
                Ok(())
            }
        }
    }
}

async fn show_route(client: &ApiClient, json: bool) -> Result<()> {
    let bins: Vec<Bin> = client.get("bins").await?;
    if json {
        print_json(&bins)
    } else {
        print!("{}", render_route(&bins));
        Ok(())
    }
}

/// Render the route as a table, one bin per line.
pub fn render_route(bins: &[Bin]) -> String {
    if bins.is_empty() {
        return "No bins on the route.\n".to_owned();
    }

    let pending = bins.iter().filter(|b| !b.is_collected()).count();
    let mut out = format!("Route: {} bin(s), {} pending\n", bins.len(), pending);

    for bin in bins {
        let marker = if bin.is_overflowing() { "!!" } else { "  " };
        let collected = bin
            .last_collected
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "never".to_owned());

        out.push_str(&format!(
            "{} #{:<4} {:<24} {:<10} {:<11} {:<9} last: {}\n",
            marker, bin.id, bin.location, bin.zone, bin.level, bin.status, collected
        ));
    }
    out
}
