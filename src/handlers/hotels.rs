// src/handlers/hotels.rs
// DOCUMENTATION: HTTP handlers for hotel details, images and rooms
// PURPOSE: Parse requests, call services, return responses

use super::parse_hotel_id;
use crate::db::HotelStore;
use crate::errors::HotelError;
use crate::services::HotelService;
use actix_web::{web, HttpResponse, Responder};

/// GET /{hotel_id}
/// Hotel with average rating, rating count and lowest room price
pub async fn get_hotel_summary(
    store: web::Data<dyn HotelStore>,
    path: web::Path<String>,
) -> Result<impl Responder, HotelError> {
    let hotel_id = parse_hotel_id(&path)?;
    let summary = HotelService::get_hotel_summary(store.get_ref(), hotel_id).await?;
    Ok(HttpResponse::Ok().json(summary))
}

/// GET /{hotel_id}/image
/// Hotel and room images, 204 when there are none
pub async fn get_hotel_images(
    store: web::Data<dyn HotelStore>,
    path: web::Path<String>,
) -> Result<impl Responder, HotelError> {
    let hotel_id = parse_hotel_id(&path)?;

    match HotelService::get_hotel_images(store.get_ref(), hotel_id).await? {
        Some(images) => Ok(HttpResponse::Ok().json(images)),
        None => Ok(HttpResponse::NoContent().finish()),
    }
}

/// GET /{hotel_id}/rooms
pub async fn list_rooms(
    store: web::Data<dyn HotelStore>,
    path: web::Path<String>,
) -> Result<impl Responder, HotelError> {
    let hotel_id = parse_hotel_id(&path)?;
    let rooms = HotelService::list_rooms(store.get_ref(), hotel_id).await?;
    Ok(HttpResponse::Ok().json(rooms))
}

/// Configuration for hotel routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/{hotel_id}", web::get().to(get_hotel_summary))
        .route("/{hotel_id}/image", web::get().to(get_hotel_images))
        .route("/{hotel_id}/rooms", web::get().to(list_rooms));
}
