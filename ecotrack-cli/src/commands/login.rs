//! Credential check against the API

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use ecotrack_server::http::responses::LoginResponse;

use super::client::{print_json, ApiClient, ClientOpts};
use crate::config::EcotrackConfig;

#[derive(Parser, Debug)]
pub struct LoginArgs {
    #[command(flatten)]
    pub client: ClientOpts,

    #[arg(long, short)]
    pub username: String,

    #[arg(long, short)]
    pub password: String,
}

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

pub async fn run_login(args: LoginArgs, config: &EcotrackConfig) -> Result<()> {
    let client = ApiClient::from_opts(&args.client, config)?;
    let body = Credentials {
        username: &args.username,
        password: &args.password,
    };

    let response: LoginResponse = client.post("login", &body).await?;

    if args.client.json {
        print_json(&response)
    } else {
        let user = &response.user;
        println!(
            "Logged in as {} (id {}, {}), {} green points",
            user.username, user.id, user.role, user.green_points
        );
        Ok(())
    }
}
