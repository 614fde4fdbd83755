// src/services/rating_service.rs
// DOCUMENTATION: Business logic for hotel ratings
// PURPOSE: One rating per user per hotel, plus rating lookups

use crate::db::HotelStore;
use crate::errors::HotelError;
use crate::models::{NewRating, Rating, RatingWithUser, SubmitRatingRequest};
use crate::services::HotelService;
use uuid::Uuid;
use validator::Validate;

pub struct RatingService;

impl RatingService {
    /// Get every rating of a hotel with its author's public profile
    /// DOCUMENTATION: An unknown hotel simply has no ratings
    pub async fn get_ratings_for_hotel(
        store: &dyn HotelStore,
        hotel_id: Uuid,
    ) -> Result<Vec<RatingWithUser>, HotelError> {
        store.find_ratings_with_users(hotel_id).await
    }

    /// Submit a user's rating for a hotel
    /// DOCUMENTATION: Fails with AlreadyRated without writing anything when
    /// the user has rated this hotel before
    pub async fn submit_rating(
        store: &dyn HotelStore,
        user_id: Uuid,
        req: SubmitRatingRequest,
    ) -> Result<Rating, HotelError> {
        req.validate()?;
        HotelService::require_hotel(store, req.hotel).await?;

        let new_rating = NewRating::from_request(user_id, req);
        store
            .insert_rating(&new_rating)
            .await?
            .ok_or(HotelError::AlreadyRated)
    }

    /// Get the rating the user gave a hotel
    pub async fn get_user_rating_for_hotel(
        store: &dyn HotelStore,
        hotel_id: Uuid,
        user_id: Uuid,
    ) -> Result<Rating, HotelError> {
        HotelService::require_hotel(store, hotel_id).await?;

        store
            .find_user_rating(hotel_id, user_id)
            .await?
            .ok_or(HotelError::RatingNotFound)
    }
}
