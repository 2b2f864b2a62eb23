//! Waste logging and per-type totals

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Body of `POST /api/waste`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewWasteLog {
    #[serde(rename = "type")]
    pub waste_type: Option<String>,
    pub weight: Option<f64>,
}

/// One row of the efficiency breakdown
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct WasteTotal {
    pub waste_type: String,
    pub total_weight: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_staff_payload() {
        let log: NewWasteLog = serde_json::from_str(r#"{"type":"Glass","weight":12.5}"#).unwrap();
        assert_eq!(log.waste_type.as_deref(), Some("Glass"));
        assert_eq!(log.weight, Some(12.5));
    }
}
