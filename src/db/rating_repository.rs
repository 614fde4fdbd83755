// src/db/rating_repository.rs
// DOCUMENTATION: Rating database operations
// PURPOSE: Create and read hotel ratings, joined with author profiles

use crate::errors::HotelError;
use crate::models::{NewRating, Rating, RatingWithUser, UserProfile};
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// Internal struct for the ratings LEFT JOIN users query
/// DOCUMENTATION: user_* columns are NULL when the author's profile is gone
#[derive(Debug, FromRow)]
struct RatingUserRow {
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub user_name: Option<String>,
    pub user_avatar: Option<String>,
}

impl RatingUserRow {
    /// Convert RatingUserRow to RatingWithUser model
    fn to_rating_with_user(self) -> RatingWithUser {
        let user = self.user_name.map(|name| UserProfile {
            id: self.user_id,
            name,
            avatar: self.user_avatar,
        });

        RatingWithUser {
            rating: Rating {
                id: self.id,
                hotel_id: self.hotel_id,
                user_id: self.user_id,
                rating: self.rating,
                comment: self.comment,
                created_at: self.created_at,
            },
            user,
        }
    }
}

pub struct RatingRepository;

impl RatingRepository {
    /// Insert a rating unless the user already rated this hotel
    /// DOCUMENTATION: Relies on the uq_ratings_hotel_user constraint, so two
    /// concurrent submissions cannot both succeed. Returns None on conflict.
    pub async fn create_rating(
        pool: &PgPool,
        new_rating: &NewRating,
    ) -> Result<Option<Rating>, HotelError> {
        let rating = sqlx::query_as::<_, Rating>(
            r#"
            INSERT INTO ratings (hotel_id, user_id, rating, comment)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (hotel_id, user_id) DO NOTHING
            RETURNING id, hotel_id, user_id, rating, comment, created_at
            "#,
        )
        .bind(new_rating.hotel_id)
        .bind(new_rating.user_id)
        .bind(new_rating.rating)
        .bind(&new_rating.comment)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create rating: {}", e);
            HotelError::DatabaseError(format!("Create rating failed: {}", e))
        })?;

        match &rating {
            Some(r) => log::info!(
                "Rating {} created for hotel {} by user {}",
                r.id,
                r.hotel_id,
                r.user_id
            ),
            None => log::warn!(
                "User {} already rated hotel {}",
                new_rating.user_id,
                new_rating.hotel_id
            ),
        }

        Ok(rating)
    }

    /// Get raw ratings for a hotel
    /// DOCUMENTATION: Used by the summary aggregation, no join needed
    pub async fn get_ratings_by_hotel(
        pool: &PgPool,
        hotel_id: Uuid,
    ) -> Result<Vec<Rating>, HotelError> {
        let ratings = sqlx::query_as::<_, Rating>(
            r#"
            SELECT id, hotel_id, user_id, rating, comment, created_at
            FROM ratings
            WHERE hotel_id = $1
            "#,
        )
        .bind(hotel_id)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch ratings for hotel {}: {}", hotel_id, e);
            HotelError::DatabaseError(format!("Fetch ratings failed: {}", e))
        })?;

        Ok(ratings)
    }

    /// Get ratings for a hotel with author profiles, newest first
    pub async fn get_ratings_with_users(
        pool: &PgPool,
        hotel_id: Uuid,
    ) -> Result<Vec<RatingWithUser>, HotelError> {
        let rows = sqlx::query_as::<_, RatingUserRow>(
            r#"
            SELECT
                r.id, r.hotel_id, r.user_id, r.rating, r.comment, r.created_at,
                u.name AS user_name,
                u.avatar AS user_avatar
            FROM ratings r
            LEFT JOIN users u ON u.id = r.user_id
            WHERE r.hotel_id = $1
            ORDER BY r.created_at DESC
            "#,
        )
        .bind(hotel_id)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch rating authors for hotel {}: {}", hotel_id, e);
            HotelError::DatabaseError(format!("Fetch ratings failed: {}", e))
        })?;

        Ok(rows.into_iter().map(RatingUserRow::to_rating_with_user).collect())
    }

    /// Get the rating a user gave a hotel, if any
    pub async fn get_user_rating(
        pool: &PgPool,
        hotel_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Rating>, HotelError> {
        sqlx::query_as::<_, Rating>(
            r#"
            SELECT id, hotel_id, user_id, rating, comment, created_at
            FROM ratings
            WHERE hotel_id = $1 AND user_id = $2
            "#,
        )
        .bind(hotel_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!(
                "Failed to fetch rating of user {} for hotel {}: {}",
                user_id,
                hotel_id,
                e
            );
            HotelError::DatabaseError(e.to_string())
        })
    }
}
