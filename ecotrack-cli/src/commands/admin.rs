//! Admin dashboard - waste breakdown, collection trend, citizen leaderboard

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;

use ecotrack_server::models::{LeaderboardEntry, TrendPoint, WasteTotal};

use super::client::{poll, print_json, ApiClient, ClientOpts, ADMIN_REFRESH};
use crate::config::EcotrackConfig;

#[derive(Parser, Debug)]
pub struct AdminArgs {
    #[command(flatten)]
    pub client: ClientOpts,

    #[command(subcommand)]
    pub command: AdminCommands,
}

#[derive(Subcommand, Debug)]
pub enum AdminCommands {
    /// Show the analytics dashboard
    Dashboard(DashboardArgs),
}

#[derive(Parser, Debug)]
pub struct DashboardArgs {
    /// Keep refreshing every 5 seconds
    #[arg(long, short)]
    pub watch: bool,
}

/// Everything the dashboard shows
#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub efficiency: Vec<WasteTotal>,
    pub trends: Vec<TrendPoint>,
    pub leaderboard: Vec<LeaderboardEntry>,
}

pub async fn run_admin(args: AdminArgs, config: &EcotrackConfig) -> Result<()> {
    let client = ApiClient::from_opts(&args.client, config)?;
    let json = args.client.json;

    match args.command {
        AdminCommands::Dashboard(dash) => {
            // Trends are a fixed series, so they are fetched once.
            let trends: Vec<TrendPoint> = client.get("analytics/trends").await?;

            if !dash.watch {
                return show(&client, &trends, json).await;
            }

            poll(ADMIN_REFRESH, || show(&client, &trends, json)).await
        }
    }
}

async fn show(client: &ApiClient, trends: &[TrendPoint], json: bool) -> Result<()> {
    let dashboard = Dashboard {
        efficiency: client.get("analytics/efficiency").await?,
        trends: trends.to_vec(),
        leaderboard: client.get("analytics/leaderboard").await?,
    };

    if json {
        print_json(&dashboard)
    } else {
        print!("{}", render_dashboard(&dashboard));
        Ok(())
    }
}

pub fn render_dashboard(dashboard: &Dashboard) -> String {
    let mut out = String::new();
    out.push_str(&render_efficiency(&dashboard.efficiency));
    out.push('\n');
    out.push_str(&render_trends(&dashboard.trends));
    out.push('\n');
    out.push_str(&render_leaderboard(&dashboard.leaderboard));
    out
}

pub fn render_efficiency(totals: &[WasteTotal]) -> String {
    let mut out = String::from("Waste by type\n");
    if totals.is_empty() {
        out.push_str("  No Data\n");
        return out;
    }

    let sum: f64 = totals.iter().map(|t| t.total_weight).sum();
    for total in totals {
        let share = if sum > 0.0 {
            total.total_weight / sum * 100.0
        } else {
            0.0
        };
        out.push_str(&format!(
            "  {:<12} {:>9.2} kg  {:>5.1}%\n",
            total.waste_type, total.total_weight, share
        ));
    }
    out
}

pub fn render_trends(trends: &[TrendPoint]) -> String {
    let mut out = String::from("Collections per month\n");
    for point in trends {
        out.push_str(&format!(
            "  {:<4} {:>4} {}\n",
            point.month,
            point.count,
            "#".repeat(point.count as usize)
        ));
    }
    out
}

pub fn render_leaderboard(entries: &[LeaderboardEntry]) -> String {
    let mut out = String::from("Leaderboard\n");
    if entries.is_empty() {
        out.push_str("  No citizens yet. Be the first to earn Green Points!\n");
        return out;
    }

    for (index, entry) in entries.iter().enumerate() {
        let rank = match index {
            0 => "🥇".to_owned(),
            1 => "🥈".to_owned(),
            2 => "🥉".to_owned(),
            n => format!("#{}", n + 1),
        };
        out.push_str(&format!(
            "  {:<4} {:<20} {:>6} pts\n",
            rank, entry.username, entry.green_points
        ));
    }
    out.push_str(&format!("  Total citizens: {}\n", entries.len()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, points: i32) -> LeaderboardEntry {
        LeaderboardEntry {
            username: name.into(),
            green_points: points,
        }
    }

    #[test]
    fn top_three_get_medals() {
        let entries = vec![
            entry("gina", 120),
            entry("eric", 85),
            entry("rita", 60),
            entry("alice", 20),
        ];
        let out = render_leaderboard(&entries);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[1].contains("🥇") && lines[1].contains("gina"));
        assert!(lines[2].contains("🥈"));
        assert!(lines[3].contains("🥉"));
        assert!(lines[4].contains("#4") && lines[4].contains("alice"));
        assert_eq!(lines[5], "  Total citizens: 4");
    }

    #[test]
    fn empty_leaderboard_invites_citizens() {
        assert!(render_leaderboard(&[]).contains("No citizens yet"));
    }

    #[test]
    fn efficiency_shows_shares() {
        let totals = vec![
            WasteTotal {
                waste_type: "Glass".into(),
                total_weight: 25.0,
            },
            WasteTotal {
                waste_type: "Plastic".into(),
                total_weight: 75.0,
            },
        ];
        let out = render_efficiency(&totals);
        assert!(out.contains("Glass"));
        assert!(out.contains("25.0%"));
        assert!(out.contains("75.0%"));
        assert!(render_efficiency(&[]).contains("No Data"));
    }

    #[test]
    fn trends_draw_bars() {
        let out = render_trends(&[TrendPoint {
            month: "Aug".into(),
            count: 3,
        }]);
        assert!(out.contains("Aug"));
        assert!(out.ends_with("###\n"));
    }
}
