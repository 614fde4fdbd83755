// src/db/hotel_repository.rs
// DOCUMENTATION: Hotel database operations
// PURPOSE: Read-only access to the hotels table

use crate::errors::HotelError;
use crate::models::Hotel;
use sqlx::PgPool;
use uuid::Uuid;

pub struct HotelRepository;

impl HotelRepository {
    /// Retrieve hotel by ID
    /// DOCUMENTATION: Returns None when no hotel has this id; callers decide
    /// which not-found message to surface
    pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Hotel>, HotelError> {
        let hotel = sqlx::query_as::<_, Hotel>(
            r#"
            SELECT id, name, description, address, city, images, created_at, updated_at
            FROM hotels
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Database error fetching hotel {}: {}", id, e);
            HotelError::DatabaseError(e.to_string())
        })?;

        if hotel.is_none() {
            log::warn!("Hotel not found: {}", id);
        }

        Ok(hotel)
    }
}
