//! Staff commands - waste logging

use anyhow::Result;
use clap::{Parser, Subcommand};

use ecotrack_server::http::responses::Ack;
use ecotrack_server::models::{NewWasteLog, ValidationError};

use super::client::{expect_success, print_json, ApiClient, ClientOpts};
use crate::config::EcotrackConfig;

#[derive(Parser, Debug)]
pub struct StaffArgs {
    #[command(flatten)]
    pub client: ClientOpts,

    #[command(subcommand)]
    pub command: StaffCommands,
}

#[derive(Subcommand, Debug)]
pub enum StaffCommands {
    /// Log a weighed load of waste
    Log(LogArgs),
}

#[derive(Parser, Debug)]
pub struct LogArgs {
    /// Waste type (e.g. Plastic, Glass, Metal, Bio)
    #[arg(long = "type", short = 't')]
    pub waste_type: String,

    /// Weight in kilograms
    #[arg(long, short)]
    pub weight: f64,
}

pub async fn run_staff(args: StaffArgs, config: &EcotrackConfig) -> Result<()> {
    let client = ApiClient::from_opts(&args.client, config)?;

    match args.command {
        StaffCommands::Log(log) => {
            let body = waste_log(&log.waste_type, log.weight)
                .map_err(|_| anyhow::anyhow!("Please enter a valid weight"))?;
            let ack: Ack = client.post("waste", &body).await?;
            let ack = expect_success(ack)?;

            if args.client.json {
                print_json(&ack)
            } else {
                println!("Logged {:.2} kg of {}", log.weight, log.waste_type);
                Ok(())
            }
        }
    }
}

/// Build a waste log entry; the weight must be a positive number.
pub fn waste_log(waste_type: &str, weight: f64) -> Result<NewWasteLog, ValidationError> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(ValidationError::NotPositive { field: "weight" });
    }

    Ok(NewWasteLog {
        waste_type: Some(waste_type.to_owned()),
        weight: Some(weight),
    })
}
