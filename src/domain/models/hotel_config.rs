use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

pub const DEFAULT_HOTEL_NAME: &str = "Mi Hotel";

/// Per-owner singleton; the document id is the owner's user id.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HotelConfig {
    pub id: String,
    #[serde(rename = "nombreHotel")]
    pub hotel_name: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl HotelConfig {
    pub fn default_for(user_id: &str) -> Self {
        let now = Utc::now();
        Self {
            id: user_id.to_string(),
            hotel_name: DEFAULT_HOTEL_NAME.to_string(),
            user_id: user_id.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct HotelConfigPatch {
    #[serde(rename = "nombreHotel", alias = "hotel_name", skip_serializing_if = "Option::is_none")]
    pub hotel_name: Option<String>,
}
