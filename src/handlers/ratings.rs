// src/handlers/ratings.rs
// DOCUMENTATION: HTTP handlers for hotel ratings
// PURPOSE: List ratings publicly, submit and read own rating when signed in

use super::{parse_hotel_id, AuthenticatedUser};
use crate::db::HotelStore;
use crate::errors::HotelError;
use crate::models::{RatingCreatedResponse, SubmitRatingRequest, UserRatingResponse};
use crate::services::RatingService;
use actix_web::{web, HttpResponse, Responder};

/// GET /{hotel_id}/ratings
/// All ratings of a hotel with author name and avatar
pub async fn get_hotel_ratings(
    store: web::Data<dyn HotelStore>,
    path: web::Path<String>,
) -> Result<impl Responder, HotelError> {
    let hotel_id = parse_hotel_id(&path)?;
    let ratings = RatingService::get_ratings_for_hotel(store.get_ref(), hotel_id).await?;
    Ok(HttpResponse::Ok().json(ratings))
}

/// POST /rate
/// Rate a hotel; each user may rate a hotel once
pub async fn submit_rating(
    store: web::Data<dyn HotelStore>,
    user: AuthenticatedUser,
    req: web::Json<SubmitRatingRequest>,
) -> Result<impl Responder, HotelError> {
    let rate = RatingService::submit_rating(store.get_ref(), user.user_id, req.into_inner()).await?;

    Ok(HttpResponse::Created().json(RatingCreatedResponse {
        message: "Rating submitted successfully".to_string(),
        rate,
    }))
}

/// GET /rate/{hotel_id}
/// The signed-in user's rating of a hotel
pub async fn get_user_rating(
    store: web::Data<dyn HotelStore>,
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<impl Responder, HotelError> {
    let hotel_id = parse_hotel_id(&path)?;
    let rate =
        RatingService::get_user_rating_for_hotel(store.get_ref(), hotel_id, user.user_id).await?;
    Ok(HttpResponse::Ok().json(UserRatingResponse { rate }))
}

/// Configuration for rating routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/rate", web::post().to(submit_rating))
        .route("/rate/{hotel_id}", web::get().to(get_user_rating))
        .route("/{hotel_id}/ratings", web::get().to(get_hotel_ratings));
}
