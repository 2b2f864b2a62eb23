//! Admin dashboard payloads

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Maximum rows on the leaderboard
pub const LEADERBOARD_SIZE: i64 = 10;

/// One leaderboard row
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub username: String,
    pub green_points: i32,
}

/// Collections counted for one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub month: String,
    pub count: u32,
}

/// Fixed six-month collection trend shown on the dashboard
pub const MONTHLY_TRENDS: [(&str, u32); 6] = [
    ("Aug", 12),
    ("Sep", 19),
    ("Oct", 25),
    ("Nov", 32),
    ("Dec", 45),
    ("Jan", 50),
];

/// Materialize the trend fixture
pub fn monthly_trends() -> Vec<TrendPoint> {
    MONTHLY_TRENDS
        .iter()
        .map(|(month, count)| TrendPoint {
            month: (*month).to_owned(),
            count: *count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trends_have_six_months_in_order() {
        let trends = monthly_trends();
        assert_eq!(trends.len(), 6);
        assert_eq!(trends[0], TrendPoint { month: "Aug".into(), count: 12 });
        assert_eq!(trends[5], TrendPoint { month: "Jan".into(), count: 50 });
    }
}
