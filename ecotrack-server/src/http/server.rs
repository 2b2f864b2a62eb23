//! Axum server setup
//!
//! Server skeleton with:
//! - CORS open to any origin
//! - Tracing middleware plus a log line for every non-GET request
//! - Optional static file serving for the browser pages
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::extract::Request;
use axum::http::Method;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::routes;
use crate::error::{Result, ServerError};
use crate::state::AppState;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:3000)
    pub bind_addr: SocketAddr,

    /// Directory with the citizen/driver/admin pages, served at `/`
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            static_dir: None,
        }
    }
}

/// Build the application router with all routes
pub fn build_router(state: AppState, static_dir: Option<PathBuf>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new().nest("/api", routes::api_router());

    let app = match static_dir {
        Some(dir) => app.fallback_service(ServeDir::new(dir)),
        None => app,
    };

    app.layer(middleware::from_fn(log_mutations))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Log method and path of every request that can change state.
async fn log_mutations(req: Request, next: Next) -> Response {
    if req.method() != Method::GET {
        tracing::info!(method = %req.method(), path = %req.uri().path(), "API request");
    }
    next.run(req).await
}

/// Run the HTTP server.
///
/// # Example
///
/// ```ignore
/// let pool = connect_supervised(&database_url, ConnectPolicy::default()).await?;
/// run_server(pool, ServerConfig::default()).await?;
/// ```
pub async fn run_server(pool: PgPool, config: ServerConfig) -> Result<()> {
    if let Some(dir) = &config.static_dir {
        if !dir.is_dir() {
            return Err(ServerError::StaticDir(dir.display().to_string()));
        }
        tracing::info!(static_dir = %dir.display(), "Serving static pages");
    }

    let app = build_router(AppState::new(pool), config.static_dir);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server running on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}
