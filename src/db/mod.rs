// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Storage port used by services, plus its implementations

pub mod hotel_repository;
#[cfg(test)]
pub mod memory;
pub mod pg_store;
pub mod rating_repository;
pub mod room_repository;

pub use hotel_repository::*;
#[cfg(test)]
pub use memory::*;
pub use pg_store::*;
pub use rating_repository::*;
pub use room_repository::*;

use crate::errors::HotelError;
use crate::models::{Hotel, NewRating, Rating, RatingWithUser, Room};
use async_trait::async_trait;
use uuid::Uuid;

/// Storage operations the hotel detail services need
/// DOCUMENTATION: Each call is an independent read or write; nothing here
/// spans a transaction. Implementations report faults as DatabaseError.
#[async_trait]
pub trait HotelStore: Send + Sync {
    /// Hotel by id, None if absent
    async fn find_hotel(&self, id: Uuid) -> Result<Option<Hotel>, HotelError>;

    /// All rooms whose hotel_id matches
    async fn find_rooms_by_hotel(&self, hotel_id: Uuid) -> Result<Vec<Room>, HotelError>;

    /// All ratings for a hotel
    async fn find_ratings_by_hotel(&self, hotel_id: Uuid) -> Result<Vec<Rating>, HotelError>;

    /// All ratings for a hotel, each with its author's public profile
    async fn find_ratings_with_users(
        &self,
        hotel_id: Uuid,
    ) -> Result<Vec<RatingWithUser>, HotelError>;

    /// The rating a user gave a hotel, None if they have not rated it
    async fn find_user_rating(
        &self,
        hotel_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Rating>, HotelError>;

    /// Atomically insert a rating unless one exists for (hotel, user).
    /// Returns None when the pair was already rated.
    async fn insert_rating(&self, new_rating: &NewRating) -> Result<Option<Rating>, HotelError>;
}
