//! Demo data reset
//!
//! Puts every bin back to Pending and appends a fixed set of bins and waste
//! entries so the driver route and dashboard have something to show.

use sqlx::PgPool;

use super::{BinRepo, DbError, WasteRepo};
use crate::models::{BinLevel, BinStatus};

/// Bins added by every reset: (location, zone, level)
pub const DEMO_BINS: [(&str, &str, BinLevel); 5] = [
    ("Central Park Gate", "Central", BinLevel::Overflowing),
    ("City Hall Plaza", "Central", BinLevel::Normal),
    ("Metro Station A", "East", BinLevel::Overflowing),
    ("University Campus", "West", BinLevel::Normal),
    ("Hospital Road", "North", BinLevel::Normal),
];

/// Waste entries added by every reset: (type, weight)
pub const DEMO_WASTE: [(&str, f64); 6] = [
    ("Plastic", 45.5),
    ("Glass", 28.2),
    ("Metal", 15.8),
    ("Bio", 32.1),
    ("Plastic", 22.3),
    ("Glass", 18.5),
];

/// What a reset changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetReport {
    pub bins_reset: u64,
    pub bins_added: usize,
    pub waste_logs_added: usize,
}

/// Reset bin status and reseed the demo rows.
pub async fn reset_demo_data(pool: &PgPool) -> Result<ResetReport, DbError> {
    let bins = BinRepo::new(pool);
    let waste = WasteRepo::new(pool);
    let mut report = ResetReport::default();

    tracing::info!("Resetting existing bins...");
    report.bins_reset = bins.reset_all_pending().await?;

    tracing::info!("Adding new bins...");
    for (location, zone, level) in DEMO_BINS {
        bins.insert(location, zone, BinStatus::Pending, level).await?;
        report.bins_added += 1;
    }

    tracing::info!("Adding waste log data...");
    for (waste_type, weight) in DEMO_WASTE {
        waste.log(Some(waste_type), Some(weight)).await?;
        report.waste_logs_added += 1;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_rows_are_well_formed() {
        assert_eq!(
            DEMO_BINS.iter().filter(|(_, _, l)| *l == BinLevel::Overflowing).count(),
            2
        );
        assert!(DEMO_WASTE.iter().all(|(_, w)| *w >= 0.0));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn reset_makes_every_bin_pending() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool creation failed");
        crate::db::schema::apply(&pool, crate::db::schema::DEFAULT_SCHEMA).await;

        let report = reset_demo_data(&pool).await.expect("reset failed");
        assert_eq!(report.bins_added, DEMO_BINS.len());
        assert_eq!(report.waste_logs_added, DEMO_WASTE.len());

        let bins = BinRepo::new(&pool).list_for_route().await.expect("list failed");
        assert!(bins.iter().all(|b| b.status == BinStatus::Pending.as_str()));
    }
}
