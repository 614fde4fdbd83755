// src/services/hotel_service.rs
// DOCUMENTATION: Business logic for hotel detail pages
// PURPOSE: Aggregate ratings, rooms and images into read models

use crate::db::HotelStore;
use crate::errors::HotelError;
use crate::models::{Hotel, HotelImages, HotelSummary, Rating, Room};
use uuid::Uuid;

/// Maximum number of hotel images returned by the gallery endpoint
pub const MAX_HOTEL_IMAGES: usize = 5;

pub struct HotelService;

impl HotelService {
    /// Get a hotel with its rating average, rating count and cheapest room
    /// DOCUMENTATION: Hotel, ratings and rooms are three independent reads;
    /// nothing is cached between requests
    pub async fn get_hotel_summary(
        store: &dyn HotelStore,
        hotel_id: Uuid,
    ) -> Result<HotelSummary, HotelError> {
        let hotel = Self::require_hotel(store, hotel_id).await?;

        let ratings = store.find_ratings_by_hotel(hotel_id).await?;
        let rooms = store.find_rooms_by_hotel(hotel_id).await?;

        Ok(HotelSummary {
            hotel,
            average_rating: Self::average_rating(&ratings),
            total_ratings: ratings.len(),
            lowest_price: Self::lowest_price(&rooms),
        })
    }

    /// Get hotel and room images
    /// DOCUMENTATION: Returns Ok(None) when the hotel exists but neither it nor
    /// its rooms have any image
    pub async fn get_hotel_images(
        store: &dyn HotelStore,
        hotel_id: Uuid,
    ) -> Result<Option<HotelImages>, HotelError> {
        let hotel = Self::require_hotel(store, hotel_id).await?;
        let rooms = store.find_rooms_by_hotel(hotel_id).await?;

        let images = Self::collect_images(&hotel, &rooms);
        if images.is_empty() {
            log::debug!("Hotel {} has no images", hotel_id);
            return Ok(None);
        }

        Ok(Some(images))
    }

    /// List every room of a hotel
    pub async fn list_rooms(
        store: &dyn HotelStore,
        hotel_id: Uuid,
    ) -> Result<Vec<Room>, HotelError> {
        Self::require_hotel(store, hotel_id).await?;
        store.find_rooms_by_hotel(hotel_id).await
    }

    /// Fetch a hotel or fail with HotelNotFound
    pub async fn require_hotel(store: &dyn HotelStore, hotel_id: Uuid) -> Result<Hotel, HotelError> {
        store
            .find_hotel(hotel_id)
            .await?
            .ok_or(HotelError::HotelNotFound(hotel_id))
    }

    /// Arithmetic mean of the scores, 0 for no ratings
    pub fn average_rating(ratings: &[Rating]) -> f64 {
        if ratings.is_empty() {
            return 0.0;
        }
        let total: i64 = ratings.iter().map(|r| i64::from(r.rating)).sum();
        total as f64 / ratings.len() as f64
    }

    /// Cheapest room price, 0 for no rooms
    pub fn lowest_price(rooms: &[Room]) -> f64 {
        rooms
            .iter()
            .map(|r| r.price)
            .reduce(f64::min)
            .unwrap_or(0.0)
    }

    /// First MAX_HOTEL_IMAGES hotel images plus all room images in room order
    pub fn collect_images(hotel: &Hotel, rooms: &[Room]) -> HotelImages {
        HotelImages {
            hotel_images: hotel.images.iter().take(MAX_HOTEL_IMAGES).cloned().collect(),
            room_images: rooms.iter().flat_map(|r| r.images.iter().cloned()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::InMemoryStore;

    #[tokio::test]
    async fn test_summary_scenario() {
        let store = InMemoryStore::new();
        let hotel_id = store.add_hotel("Riverside", &[]).await;
        for price in [120.0, 95.0, 200.0] {
            store.add_room(hotel_id, price, &[]).await;
        }
        store.add_rating(hotel_id, Uuid::new_v4(), 5).await;
        store.add_rating(hotel_id, Uuid::new_v4(), 3).await;

        let summary = HotelService::get_hotel_summary(&store, hotel_id).await.unwrap();

        assert_eq!(summary.hotel.id, hotel_id);
        assert_eq!(summary.average_rating, 4.0);
        assert_eq!(summary.total_ratings, 2);
        assert_eq!(summary.lowest_price, 95.0);
    }

    #[tokio::test]
    async fn test_summary_without_ratings_or_rooms_is_zero() {
        let store = InMemoryStore::new();
        let hotel_id = store.add_hotel("Empty", &[]).await;

        let summary = HotelService::get_hotel_summary(&store, hotel_id).await.unwrap();

        assert_eq!(summary.average_rating, 0.0);
        assert_eq!(summary.total_ratings, 0);
        assert_eq!(summary.lowest_price, 0.0);
    }

    #[tokio::test]
    async fn test_summary_ignores_other_hotels() {
        let store = InMemoryStore::new();
        let hotel_id = store.add_hotel("Ours", &[]).await;
        let other_id = store.add_hotel("Theirs", &[]).await;
        store.add_room(other_id, 10.0, &[]).await;
        store.add_rating(other_id, Uuid::new_v4(), 1).await;
        store.add_room(hotel_id, 80.0, &[]).await;

        let summary = HotelService::get_hotel_summary(&store, hotel_id).await.unwrap();

        assert_eq!(summary.total_ratings, 0);
        assert_eq!(summary.lowest_price, 80.0);
    }

    #[tokio::test]
    async fn test_summary_unknown_hotel() {
        let store = InMemoryStore::new();

        let result = HotelService::get_hotel_summary(&store, Uuid::new_v4()).await;

        assert!(matches!(result, Err(HotelError::HotelNotFound(_))));
    }

    #[tokio::test]
    async fn test_summary_store_failure() {
        let store = InMemoryStore::new();
        let hotel_id = store.add_hotel("Down", &[]).await;
        store.set_unavailable(true);

        let result = HotelService::get_hotel_summary(&store, hotel_id).await;

        assert!(matches!(result, Err(HotelError::DatabaseError(_))));
    }

    #[test]
    fn test_average_rating_is_arithmetic_mean() {
        let store_ratings: Vec<Rating> = [2, 4, 5]
            .into_iter()
            .map(|score| Rating {
                id: Uuid::new_v4(),
                hotel_id: Uuid::nil(),
                user_id: Uuid::new_v4(),
                rating: score,
                comment: None,
                created_at: chrono::Utc::now(),
            })
            .collect();

        let avg = HotelService::average_rating(&store_ratings);
        assert!((avg - 11.0 / 3.0).abs() < 1e-12);
        assert_eq!(HotelService::average_rating(&[]), 0.0);
    }

    #[tokio::test]
    async fn test_images_prefix_and_room_concatenation() {
        let store = InMemoryStore::new();
        let hotel_id = store
            .add_hotel("Gallery", &["h1", "h2", "h3", "h4", "h5", "h6", "h7"])
            .await;
        store.add_room(hotel_id, 50.0, &["r1a", "r1b"]).await;
        store.add_room(hotel_id, 60.0, &[]).await;
        store.add_room(hotel_id, 70.0, &["r3a"]).await;

        let images = HotelService::get_hotel_images(&store, hotel_id)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(images.hotel_images, vec!["h1", "h2", "h3", "h4", "h5"]);
        assert_eq!(images.room_images, vec!["r1a", "r1b", "r3a"]);
    }

    #[tokio::test]
    async fn test_images_short_gallery_kept_whole() {
        let store = InMemoryStore::new();
        let hotel_id = store.add_hotel("Small", &["only"]).await;

        let images = HotelService::get_hotel_images(&store, hotel_id)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(images.hotel_images, vec!["only"]);
        assert!(images.room_images.is_empty());
    }

    #[tokio::test]
    async fn test_images_none_when_nothing_to_show() {
        let store = InMemoryStore::new();
        let hotel_id = store.add_hotel("Bare", &[]).await;
        store.add_room(hotel_id, 40.0, &[]).await;

        let images = HotelService::get_hotel_images(&store, hotel_id).await.unwrap();

        assert!(images.is_none());
    }

    #[tokio::test]
    async fn test_list_rooms() {
        let store = InMemoryStore::new();
        let hotel_id = store.add_hotel("Rooms", &[]).await;
        let first = store.add_room(hotel_id, 100.0, &[]).await;
        let second = store.add_room(hotel_id, 150.0, &[]).await;
        store.add_room(store.add_hotel("Elsewhere", &[]).await, 90.0, &[]).await;

        let rooms = HotelService::list_rooms(&store, hotel_id).await.unwrap();

        let ids: Vec<Uuid> = rooms.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![first, second]);

        let missing = HotelService::list_rooms(&store, Uuid::new_v4()).await;
        assert!(matches!(missing, Err(HotelError::HotelNotFound(_))));
    }
}
