//! HTTP client helpers shared by the citizen, driver, staff, and admin commands
//!
//! Watch mode re-fetches on a fixed interval and re-renders in full. A failed
//! refresh is logged and the loop carries on with the next tick.

use std::future::Future;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::Args;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use ecotrack_server::http::responses::Ack;

use crate::config::EcotrackConfig;

/// Citizen points refresh period
pub const CITIZEN_REFRESH: Duration = Duration::from_secs(3);
/// Driver route refresh period
pub const DRIVER_REFRESH: Duration = Duration::from_secs(5);
/// Admin dashboard refresh period
pub const ADMIN_REFRESH: Duration = Duration::from_secs(5);

/// Options every client command accepts
#[derive(Args, Debug, Clone)]
pub struct ClientOpts {
    /// API base URL (default: http://localhost:3000/api)
    #[arg(long, env = "ECOTRACK_API_URL", global = true)]
    pub endpoint: Option<String>,

    /// Print raw JSON instead of the human rendering
    #[arg(long, global = true)]
    pub json: bool,
}

/// Thin JSON client for the EcoTrack API
pub struct ApiClient {
    http: Client,
    base: String,
}

impl ApiClient {
    pub fn new(base: &str) -> Result<Self> {
        let http = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base: base.trim_end_matches('/').to_owned(),
        })
    }

    pub fn from_opts(opts: &ClientOpts, config: &EcotrackConfig) -> Result<Self> {
        Self::new(&config.api_url(opts.endpoint.clone()))
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .context("Failed to connect to EcoTrack API")?;

        handle_response(response).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .context("Failed to connect to EcoTrack API")?;

        handle_response(response).await
    }
}

async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        response.json::<T>().await.context("Failed to parse response")
    } else {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        match serde_json::from_str::<Ack>(&error_text) {
            Ok(Ack {
                message: Some(message),
                ..
            }) => Err(anyhow!("{}: {}", status, message)),
            _ => Err(anyhow!("{}: {}", status, error_text)),
        }
    }
}

/// Fail unless the server acknowledged the action.
pub fn expect_success(ack: Ack) -> Result<Ack> {
    if ack.success {
        Ok(ack)
    } else {
        Err(anyhow!(
            "{}",
            ack.message.unwrap_or_else(|| "Request failed".to_owned())
        ))
    }
}

/// Run `tick` now and then every `every` until Ctrl+C.
pub async fn poll<F, Fut>(every: Duration, tick: F) -> Result<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };
    poll_until(every, ctrl_c, tick).await
}

/// Run `tick` now and then every `every` until `stop` completes.
///
/// `stop` is polled for the whole loop, so a stop that fires while a tick is
/// in flight ends the loop right after that tick.
pub async fn poll_until<S, F, Fut>(every: Duration, stop: S, mut tick: F) -> Result<()>
where
    S: Future<Output = ()>,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let mut interval = tokio::time::interval(every);
    tokio::pin!(stop);

    loop {
        tokio::select! {
            _ = &mut stop => {
                tracing::info!("Stopped watching");
                return Ok(());
            }
            _ = interval.tick() => {
                if let Err(e) = tick().await {
                    tracing::warn!(error = %e, "Refresh failed");
                }
            }
        }
    }
}

/// Print a value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slashes() {
        let client = ApiClient::new("http://localhost:3000/api/").unwrap();
        assert_eq!(client.url("/bins"), "http://localhost:3000/api/bins");
        assert_eq!(client.url("users/1"), "http://localhost:3000/api/users/1");
    }

    #[test]
    fn failed_ack_becomes_error() {
        let err = expect_success(Ack::failure("Invalid credentials")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(expect_success(Ack::ok()).is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn poll_ticks_immediately_then_on_interval() {
        let counter = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let seen = counter.clone();

        let handle = tokio::spawn(async move {
            poll(Duration::from_secs(5), move || {
                let seen = seen.clone();
                async move {
                    seen.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
                    Err(anyhow!("server down"))
                }
            })
            .await
        });

        tokio::time::sleep(Duration::from_secs(11)).await;
        handle.abort();

        // Ticks at 0s, 5s, 10s; errors do not stop the loop.
        assert_eq!(counter.load(std::sync::atomic::Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_during_a_tick_ends_the_loop_after_it() {
        let calls = std::cell::Cell::new(0);
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        let tx = std::cell::RefCell::new(Some(tx));

        let stop = async {
            rx.await.ok();
        };

        let result = poll_until(Duration::from_secs(5), stop, || {
            calls.set(calls.get() + 1);
            if calls.get() == 2 {
                if let Some(tx) = tx.borrow_mut().take() {
                    tx.send(()).ok();
                }
            }
            async { Ok::<(), anyhow::Error>(()) }
        })
        .await;

        assert!(result.is_ok());
        assert_eq!(calls.get(), 2);
    }
}
