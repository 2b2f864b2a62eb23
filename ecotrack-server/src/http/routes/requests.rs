//! Citizen request submission

use axum::{extract::State, routing::post, Json, Router};

use crate::db::RequestRepo;
use crate::http::error::ApiError;
use crate::http::extractors::ApiJson;
use crate::http::responses::Ack;
use crate::models::NewRequest;
use crate::state::AppState;

/// Confirmation text for an accepted request
pub const REQUEST_SUBMITTED: &str = "Request submitted!";

/// POST /requests - record the request and award points
async fn submit_request(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<NewRequest>,
) -> Result<Json<Ack>, ApiError> {
    tracing::info!(
        user_id = ?req.user_id,
        request_type = ?req.request_type,
        details = ?req.details,
        "Request submission"
    );

    RequestRepo::new(state.pool()).submit(&req).await?;

    Ok(Json(Ack::ok_with(REQUEST_SUBMITTED)))
}

/// Request routes
pub fn router() -> Router<AppState> {
    Router::new().route("/requests", post(submit_request))
}
