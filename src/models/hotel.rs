// src/models/hotel.rs
// DOCUMENTATION: Hotel record and the read models derived from it
// PURPOSE: Serialization models for hotel detail endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Represents a hotel record from the database
/// DOCUMENTATION: Maps directly to the hotels table
/// Hotels are written by other services; this one only reads them
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    /// Unique identifier (UUID v4)
    pub id: Uuid,

    pub name: String,

    pub description: Option<String>,

    /// Street address
    pub address: Option<String>,

    pub city: Option<String>,

    /// Image URLs in display order
    pub images: Vec<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Hotel plus metrics aggregated from its ratings and rooms
/// DOCUMENTATION: Response DTO for GET /{hotelId}
/// Computed on every request, never persisted
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelSummary {
    pub hotel: Hotel,

    /// Mean rating score, 0 when the hotel has no ratings
    pub average_rating: f64,

    pub total_ratings: usize,

    /// Cheapest room price, 0 when the hotel has no rooms
    pub lowest_price: f64,
}

/// Gallery for a hotel detail page
/// DOCUMENTATION: Response DTO for GET /{hotelId}/image
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelImages {
    /// Leading hotel images, at most MAX_HOTEL_IMAGES
    pub hotel_images: Vec<String>,

    /// Every room image, room by room
    pub room_images: Vec<String>,
}

impl HotelImages {
    pub fn is_empty(&self) -> bool {
        self.hotel_images.is_empty() && self.room_images.is_empty()
    }
}
