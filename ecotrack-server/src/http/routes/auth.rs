//! Login endpoint

use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;

use crate::db::UserRepo;
use crate::http::error::ApiError;
use crate::http::extractors::ApiJson;
use crate::http::responses::LoginResponse;
use crate::state::AppState;

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// POST /login - check credentials, return the user row once
async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    tracing::info!(username = ?req.username, "Login attempt");

    let user = UserRepo::new(state.pool())
        .find_by_credentials(req.username.as_deref(), req.password.as_deref())
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    Ok(Json(LoginResponse {
        success: true,
        user,
    }))
}

/// Auth routes
pub fn router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}
