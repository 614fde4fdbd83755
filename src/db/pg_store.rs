// src/db/pg_store.rs
// DOCUMENTATION: PostgreSQL-backed HotelStore
// PURPOSE: Route store calls to the per-table repositories

use super::{HotelRepository, HotelStore, RatingRepository, RoomRepository};
use crate::errors::HotelError;
use crate::models::{Hotel, NewRating, Rating, RatingWithUser, Room};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HotelStore for PgStore {
    async fn find_hotel(&self, id: Uuid) -> Result<Option<Hotel>, HotelError> {
        HotelRepository::get_by_id(&self.pool, id).await
    }

    async fn find_rooms_by_hotel(&self, hotel_id: Uuid) -> Result<Vec<Room>, HotelError> {
        RoomRepository::get_rooms_by_hotel(&self.pool, hotel_id).await
    }

    async fn find_ratings_by_hotel(&self, hotel_id: Uuid) -> Result<Vec<Rating>, HotelError> {
        RatingRepository::get_ratings_by_hotel(&self.pool, hotel_id).await
    }

    async fn find_ratings_with_users(
        &self,
        hotel_id: Uuid,
    ) -> Result<Vec<RatingWithUser>, HotelError> {
        RatingRepository::get_ratings_with_users(&self.pool, hotel_id).await
    }

    async fn find_user_rating(
        &self,
        hotel_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Rating>, HotelError> {
        RatingRepository::get_user_rating(&self.pool, hotel_id, user_id).await
    }

    async fn insert_rating(&self, new_rating: &NewRating) -> Result<Option<Rating>, HotelError> {
        RatingRepository::create_rating(&self.pool, new_rating).await
    }
}
