// src/models/rating.rs
// DOCUMENTATION: Hotel ratings submitted by signed-in users
// PURPOSE: Database record, request DTO and response envelopes for ratings

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::UserProfile;

/// A user's score for a hotel
/// DOCUMENTATION: Maps to the ratings table, unique per (hotel_id, user_id)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body of POST /rate
/// DOCUMENTATION: The submitting user comes from the bearer token, never the body
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitRatingRequest {
    /// Hotel being rated
    #[serde(alias = "hotelId")]
    pub hotel: Uuid,

    /// Score from 1 to 5
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: i32,

    /// Optional free-text review
    #[validate(length(max = 1000, message = "comment must be at most 1000 characters"))]
    pub comment: Option<String>,
}

/// Rating ready to be inserted
#[derive(Debug, Clone)]
pub struct NewRating {
    pub hotel_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
    pub comment: Option<String>,
}

impl NewRating {
    pub fn from_request(user_id: Uuid, req: SubmitRatingRequest) -> Self {
        NewRating {
            hotel_id: req.hotel,
            user_id,
            rating: req.rating,
            comment: req.comment,
        }
    }
}

/// Rating with its author's public profile
/// DOCUMENTATION: Element of GET /{hotelId}/ratings
/// `user` is null when the author's profile no longer exists
#[derive(Debug, Clone, Serialize)]
pub struct RatingWithUser {
    #[serde(flatten)]
    pub rating: Rating,
    pub user: Option<UserProfile>,
}

/// Response for POST /rate
#[derive(Debug, Serialize)]
pub struct RatingCreatedResponse {
    pub message: String,
    pub rate: Rating,
}

/// Response for GET /rate/{hotelId}
#[derive(Debug, Serialize)]
pub struct UserRatingResponse {
    pub rate: Rating,
}
