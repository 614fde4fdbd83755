// src/db/room_repository.rs
// DOCUMENTATION: Room database operations
// PURPOSE: Fetch the rooms belonging to a hotel

use crate::errors::HotelError;
use crate::models::Room;
use sqlx::PgPool;
use uuid::Uuid;

pub struct RoomRepository;

impl RoomRepository {
    /// Get rooms for a hotel
    /// DOCUMENTATION: Oldest room first; clients must not depend on the order
    pub async fn get_rooms_by_hotel(pool: &PgPool, hotel_id: Uuid) -> Result<Vec<Room>, HotelError> {
        let rooms = sqlx::query_as::<_, Room>(
            r#"
            SELECT id, hotel_id, name, room_type, price, capacity, images, created_at
            FROM rooms
            WHERE hotel_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(hotel_id)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch rooms for hotel {}: {}", hotel_id, e);
            HotelError::DatabaseError(format!("Fetch rooms failed: {}", e))
        })?;

        Ok(rooms)
    }
}
