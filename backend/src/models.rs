use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

/// One row of the `tweets` table.
#[derive(sqlx::FromRow)]
pub struct PostRow {
    pub id: String,
    pub user_handle: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        // half a coordinate is no coordinate
        let coordinates = match (row.lat, row.lon) {
            (Some(lat), Some(lon)) => Some(Coordinates { lat, lon }),
            _ => None,
        };

        Self {
            id: row.id,
            user: row.user_handle,
            text: row.text,
            created_at: row.created_at,
            coordinates,
        }
    }
}
