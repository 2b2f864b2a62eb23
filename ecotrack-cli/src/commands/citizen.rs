//! Citizen commands - point balance, pickup requests, overflow reports

use std::cell::Cell;

use anyhow::Result;
use clap::{Parser, Subcommand};

use ecotrack_server::http::responses::Ack;
use ecotrack_server::models::{NewRequest, PointsBalance, RequestType, ValidationError, POINTS_PER_REQUEST};

use super::client::{expect_success, poll, print_json, ApiClient, ClientOpts, CITIZEN_REFRESH};
use crate::config::EcotrackConfig;

#[derive(Parser, Debug)]
pub struct CitizenArgs {
    #[command(flatten)]
    pub client: ClientOpts,

    #[command(subcommand)]
    pub command: CitizenCommands,
}

#[derive(Subcommand, Debug)]
pub enum CitizenCommands {
    /// Show green points (use --watch to follow changes)
    Points(PointsArgs),
    /// Schedule a special pickup
    Pickup(PickupArgs),
    /// Report an overflowing bin
    Report(ReportArgs),
}

#[derive(Parser, Debug)]
pub struct PointsArgs {
    /// Citizen user id
    #[arg(long, short, default_value = "1")]
    pub user: i32,

    /// Keep refreshing every 3 seconds
    #[arg(long, short)]
    pub watch: bool,
}

#[derive(Parser, Debug)]
pub struct PickupArgs {
    /// Citizen user id
    #[arg(long, short, default_value = "1")]
    pub user: i32,

    /// Kind of items (e.g. Furniture, Electronics)
    #[arg(long, short, default_value = "General")]
    pub category: String,

    /// Description of the items
    #[arg(long, short)]
    pub details: String,
}

#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Citizen user id
    #[arg(long, short, default_value = "1")]
    pub user: i32,

    /// Where the overflowing bin is
    #[arg(long, short)]
    pub location: String,
}

pub async fn run_citizen(args: CitizenArgs, config: &EcotrackConfig) -> Result<()> {
    let client = ApiClient::from_opts(&args.client, config)?;
    let json = args.client.json;

    match args.command {
        CitizenCommands::Points(points) => run_points(&client, points, json).await,
        CitizenCommands::Pickup(pickup) => {
            let req = pickup_request(pickup.user, &pickup.category, &pickup.details)
                .map_err(|_| anyhow::anyhow!("Please describe the items"))?;
            submit(&client, &req, "Request submitted!", json).await
        }
        CitizenCommands::Report(report) => {
            let req = report_request(report.user, &report.location)
                .map_err(|_| anyhow::anyhow!("Please enter location"))?;
            submit(&client, &req, "Reported!", json).await
        }
    }
}

/// Build a special pickup request; the details must not be blank.
pub fn pickup_request(user_id: i32, category: &str, details: &str) -> Result<NewRequest, ValidationError> {
    if details.trim().is_empty() {
        return Err(ValidationError::Empty { field: "details" });
    }

    Ok(NewRequest {
        user_id: Some(user_id),
        request_type: Some(RequestType::SpecialPickup.as_str().to_owned()),
        details: Some(format!("{}: {}", category, details)),
    })
}

/// Build an overflowing bin report; the location must not be blank.
pub fn report_request(user_id: i32, location: &str) -> Result<NewRequest, ValidationError> {
    if location.trim().is_empty() {
        return Err(ValidationError::Empty { field: "location" });
    }

    Ok(NewRequest {
        user_id: Some(user_id),
        request_type: Some(RequestType::OverflowingBin.as_str().to_owned()),
        details: Some(format!("Location: {}", location)),
    })
}

async fn submit(client: &ApiClient, req: &NewRequest, done: &str, json: bool) -> Result<()> {
    let ack: Ack = client.post("requests", req).await?;
    let ack = expect_success(ack)?;

    if json {
        return print_json(&ack);
    }

    println!("{} +{} Points", done, POINTS_PER_REQUEST);

    if let Some(user_id) = req.user_id {
        let balance: PointsBalance = client.get(&format!("users/{}", user_id)).await?;
        println!("Green points: {}", balance.green_points);
    }
    Ok(())
}

async fn run_points(client: &ApiClient, args: PointsArgs, json: bool) -> Result<()> {
    let path = format!("users/{}", args.user);

    if !args.watch {
        let balance: PointsBalance = client.get(&path).await?;
        return if json {
            print_json(&balance)
        } else {
            println!("Green points: {}", balance.green_points);
            Ok(())
        };
    }

    let last = Cell::new(None::<i32>);
    let last = &last;
    poll(CITIZEN_REFRESH, move || {
        let path = path.clone();
        async move {
            let balance: PointsBalance = client.get(&path).await?;
            if let Some(line) = points_change(last.get(), balance.green_points) {
                if json {
                    print_json(&balance)?;
                } else {
                    println!("{}", line);
                }
            }
            last.set(Some(balance.green_points));
            Ok(())
        }
    })
    .await
}

/// Line to print when the balance moved, `None` when it did not.
pub fn points_change(previous: Option<i32>, current: i32) -> Option<String> {
    match previous {
        Some(prev) if prev == current => None,
        Some(prev) => Some(format!("Green points: {} ({:+})", current, current - prev)),
        None => Some(format!("Green points: {}", current)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pickup_prefixes_category() {
        let req = pickup_request(1, "Furniture", "Old sofa").unwrap();
        assert_eq!(req.user_id, Some(1));
        assert_eq!(req.request_type.as_deref(), Some("Special Pickup"));
        assert_eq!(req.details.as_deref(), Some("Furniture: Old sofa"));
    }

    #[test]
    fn blank_pickup_is_rejected() {
        assert_eq!(
            pickup_request(1, "Furniture", "   ").unwrap_err(),
            ValidationError::Empty { field: "details" }
        );
    }

    #[test]
    fn report_uses_location_prefix() {
        let req = report_request(3, "Main St").unwrap();
        assert_eq!(req.request_type.as_deref(), Some("Overflowing Bin"));
        assert_eq!(req.details.as_deref(), Some("Location: Main St"));
        assert!(report_request(3, "").is_err());
    }

    #[test]
    fn points_change_only_on_new_value() {
        assert_eq!(points_change(None, 20).as_deref(), Some("Green points: 20"));
        assert_eq!(points_change(Some(20), 20), None);
        assert_eq!(points_change(Some(20), 30).as_deref(), Some("Green points: 30 (+10)"));
    }
}
