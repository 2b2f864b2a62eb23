//! User point balance

use axum::{extract::State, routing::get, Json, Router};

use crate::db::UserRepo;
use crate::http::error::ApiError;
use crate::http::extractors::IdPath;
use crate::models::PointsBalance;
use crate::state::AppState;

/// GET /users/{id} - green points, zero for unknown users
async fn get_points(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<PointsBalance>, ApiError> {
    let balance = UserRepo::new(state.pool())
        .points(id)
        .await?
        .unwrap_or_default();

    Ok(Json(balance))
}

/// User routes
pub fn router() -> Router<AppState> {
    Router::new().route("/users/{id}", get(get_points))
}
