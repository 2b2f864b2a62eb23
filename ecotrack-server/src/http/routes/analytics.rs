//! Admin dashboard endpoints

use axum::{extract::State, routing::get, Json, Router};

use crate::db::AnalyticsRepo;
use crate::http::error::ApiError;
use crate::models::{monthly_trends, LeaderboardEntry, TrendPoint, WasteTotal};
use crate::state::AppState;

/// GET /analytics/efficiency - weight per waste type
async fn efficiency(State(state): State<AppState>) -> Result<Json<Vec<WasteTotal>>, ApiError> {
    let totals = AnalyticsRepo::new(state.pool()).efficiency().await?;
    Ok(Json(totals))
}

/// GET /analytics/leaderboard - top ten citizens
async fn leaderboard(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeaderboardEntry>>, ApiError> {
    let entries = AnalyticsRepo::new(state.pool()).leaderboard().await?;
    Ok(Json(entries))
}

/// GET /analytics/trends - fixed monthly collection counts
async fn trends() -> Json<Vec<TrendPoint>> {
    Json(monthly_trends())
}

/// Analytics routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/analytics/efficiency", get(efficiency))
        .route("/analytics/leaderboard", get(leaderboard))
        .route("/analytics/trends", get(trends))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn trends_returns_fixture() {
        let Json(body) = trends().await;
        assert_eq!(body.len(), 6);
        assert_eq!(body[2].month, "Oct");
        assert_eq!(body[2].count, 25);
    }
}
