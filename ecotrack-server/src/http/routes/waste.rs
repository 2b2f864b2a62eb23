//! Staff waste logging

use axum::{extract::State, routing::post, Json, Router};

use crate::db::WasteRepo;
use crate::http::error::ApiError;
use crate::http::extractors::ApiJson;
use crate::http::responses::Ack;
use crate::models::NewWasteLog;
use crate::state::AppState;

/// POST /waste - append a weighed entry
async fn log_waste(
    State(state): State<AppState>,
    ApiJson(log): ApiJson<NewWasteLog>,
) -> Result<Json<Ack>, ApiError> {
    tracing::info!(waste_type = ?log.waste_type, weight = ?log.weight, "Waste logged");

    WasteRepo::new(state.pool())
        .log(log.waste_type.as_deref(), log.weight)
        .await?;

    Ok(Json(Ack::ok()))
}

/// Waste routes
pub fn router() -> Router<AppState> {
    Router::new().route("/waste", post(log_waste))
}
