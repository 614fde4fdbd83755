// src/db/memory.rs
// DOCUMENTATION: In-memory HotelStore for tests
// PURPOSE: Exercise services and handlers without a PostgreSQL instance

use super::HotelStore;
use crate::errors::HotelError;
use crate::models::{Hotel, NewRating, Rating, RatingWithUser, Room, UserProfile};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Thread-safe store backed by maps and vectors
/// Rooms and ratings keep insertion order, which stands in for store order.
#[derive(Default)]
pub struct InMemoryStore {
    hotels: RwLock<HashMap<Uuid, Hotel>>,
    rooms: RwLock<Vec<Room>>,
    ratings: RwLock<Vec<Rating>>,
    users: RwLock<HashMap<Uuid, UserProfile>>,
    unavailable: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a hotel with the given images and return its id
    pub async fn add_hotel(&self, name: &str, images: &[&str]) -> Uuid {
        let now = Utc::now();
        let hotel = Hotel {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            address: None,
            city: None,
            images: images.iter().map(|s| s.to_string()).collect(),
            created_at: now,
            updated_at: now,
        };
        let id = hotel.id;
        self.hotels.write().await.insert(id, hotel);
        id
    }

    pub async fn add_room(&self, hotel_id: Uuid, price: f64, images: &[&str]) -> Uuid {
        let mut rooms = self.rooms.write().await;
        let room = Room {
            id: Uuid::new_v4(),
            hotel_id,
            name: format!("Room {}", rooms.len() + 1),
            room_type: None,
            price,
            capacity: Some(2),
            images: images.iter().map(|s| s.to_string()).collect(),
            created_at: Utc::now(),
        };
        let id = room.id;
        rooms.push(room);
        id
    }

    pub async fn add_user(&self, name: &str, avatar: Option<&str>) -> Uuid {
        let user = UserProfile {
            id: Uuid::new_v4(),
            name: name.to_string(),
            avatar: avatar.map(str::to_string),
        };
        let id = user.id;
        self.users.write().await.insert(id, user);
        id
    }

    /// Store a rating directly, bypassing the uniqueness check
    pub async fn add_rating(&self, hotel_id: Uuid, user_id: Uuid, score: i32) -> Rating {
        let rating = Rating {
            id: Uuid::new_v4(),
            hotel_id,
            user_id,
            rating: score,
            comment: None,
            created_at: Utc::now(),
        };
        self.ratings.write().await.push(rating.clone());
        rating
    }

    /// Number of stored ratings for a (hotel, user) pair
    pub async fn rating_count(&self, hotel_id: Uuid, user_id: Uuid) -> usize {
        self.ratings
            .read()
            .await
            .iter()
            .filter(|r| r.hotel_id == hotel_id && r.user_id == user_id)
            .count()
    }

    /// Make every subsequent call fail like a lost database connection
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), HotelError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(HotelError::DatabaseError("store unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl HotelStore for InMemoryStore {
    async fn find_hotel(&self, id: Uuid) -> Result<Option<Hotel>, HotelError> {
        self.check_available()?;
        Ok(self.hotels.read().await.get(&id).cloned())
    }

    async fn find_rooms_by_hotel(&self, hotel_id: Uuid) -> Result<Vec<Room>, HotelError> {
        self.check_available()?;
        Ok(self
            .rooms
            .read()
            .await
            .iter()
            .filter(|r| r.hotel_id == hotel_id)
            .cloned()
            .collect())
    }

    async fn find_ratings_by_hotel(&self, hotel_id: Uuid) -> Result<Vec<Rating>, HotelError> {
        self.check_available()?;
        Ok(self
            .ratings
            .read()
            .await
            .iter()
            .filter(|r| r.hotel_id == hotel_id)
            .cloned()
            .collect())
    }

    async fn find_ratings_with_users(
        &self,
        hotel_id: Uuid,
    ) -> Result<Vec<RatingWithUser>, HotelError> {
        self.check_available()?;
        let ratings = self.ratings.read().await;
        let users = self.users.read().await;

        Ok(ratings
            .iter()
            .rev()
            .filter(|r| r.hotel_id == hotel_id)
            .map(|r| RatingWithUser {
                rating: r.clone(),
                user: users.get(&r.user_id).cloned(),
            })
            .collect())
    }

    async fn find_user_rating(
        &self,
        hotel_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Rating>, HotelError> {
        self.check_available()?;
        Ok(self
            .ratings
            .read()
            .await
            .iter()
            .find(|r| r.hotel_id == hotel_id && r.user_id == user_id)
            .cloned())
    }

    async fn insert_rating(&self, new_rating: &NewRating) -> Result<Option<Rating>, HotelError> {
        self.check_available()?;
        // Check and insert under one write guard
        let mut ratings = self.ratings.write().await;
        let exists = ratings
            .iter()
            .any(|r| r.hotel_id == new_rating.hotel_id && r.user_id == new_rating.user_id);
        if exists {
            return Ok(None);
        }

        let rating = Rating {
            id: Uuid::new_v4(),
            hotel_id: new_rating.hotel_id,
            user_id: new_rating.user_id,
            rating: new_rating.rating,
            comment: new_rating.comment.clone(),
            created_at: Utc::now(),
        };
        ratings.push(rating.clone());
        Ok(Some(rating))
    }
}
