//! Driver route endpoints

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::db::BinRepo;
use crate::http::error::ApiError;
use crate::http::extractors::IdPath;
use crate::http::responses::Ack;
use crate::models::Bin;
use crate::state::AppState;

/// GET /bins - all bins, overflowing first
async fn list_bins(State(state): State<AppState>) -> Result<Json<Vec<Bin>>, ApiError> {
    let bins = BinRepo::new(state.pool()).list_for_route().await?;
    Ok(Json(bins))
}

/// POST /bins/{id}/collect - mark collected and emptied
async fn collect_bin(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Ack>, ApiError> {
    let updated = BinRepo::new(state.pool()).collect(id).await?;
    tracing::info!(bin_id = id, updated, "Bin collected");

    Ok(Json(Ack::ok()))
}

/// Bin routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/bins", get(list_bins))
        .route("/bins/{id}/collect", post(collect_bin))
}
