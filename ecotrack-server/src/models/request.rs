//! Citizen service requests

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Points credited to the requester for every submitted request
pub const POINTS_PER_REQUEST: i32 = 10;

/// Kind of citizen request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestType {
    #[serde(rename = "Special Pickup")]
    SpecialPickup,
    #[serde(rename = "Overflowing Bin")]
    OverflowingBin,
}

impl RequestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SpecialPickup => "Special Pickup",
            Self::OverflowingBin => "Overflowing Bin",
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Special Pickup" => Ok(Self::SpecialPickup),
            "Overflowing Bin" => Ok(Self::OverflowingBin),
            other => Err(ValidationError::InvalidVariant {
                field: "type",
                value: other.to_owned(),
            }),
        }
    }
}

/// Body of `POST /api/requests`.
///
/// Fields are optional on purpose: a missing field is bound as NULL and the
/// store's constraints decide whether the row is acceptable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewRequest {
    #[serde(rename = "userId")]
    pub user_id: Option<i32>,
    #[serde(rename = "type")]
    pub request_type: Option<String>,
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_client_payload() {
        let req: NewRequest = serde_json::from_str(
            r#"{"userId":1,"type":"Special Pickup","details":"Old sofa"}"#,
        )
        .unwrap();
        assert_eq!(req.user_id, Some(1));
        assert_eq!(req.request_type.as_deref(), Some("Special Pickup"));
        assert_eq!(req.details.as_deref(), Some("Old sofa"));
    }

    #[test]
    fn missing_fields_decode_as_none() {
        let req: NewRequest = serde_json::from_str("{}").unwrap();
        assert!(req.user_id.is_none());
        assert!(req.request_type.is_none());
        assert!(req.details.is_none());
    }

    #[test]
    fn request_type_text() {
        assert_eq!(
            "Overflowing Bin".parse::<RequestType>().unwrap(),
            RequestType::OverflowingBin
        );
        assert_eq!(
            serde_json::to_value(RequestType::SpecialPickup).unwrap(),
            serde_json::json!("Special Pickup")
        );
    }
}
