// src/models/room.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Bookable room belonging to exactly one hotel
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub name: String,
    pub room_type: Option<String>,
    pub price: f64,
    pub capacity: Option<i32>,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}
