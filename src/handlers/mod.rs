// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Route table and helpers shared by the HTTP handlers

pub mod auth;
pub mod health;
pub mod hotels;
pub mod ratings;

pub use auth::AuthenticatedUser;
pub use health::config as health_config;

use crate::errors::HotelError;
use actix_web::web;
use uuid::Uuid;

/// Mount point of the hotel detail routes
pub const DETAIL_SCOPE: &str = "/api/detail";

/// Configuration for hotel detail routes
/// Rating routes are registered first so `/rate/...` never reaches `/{hotel_id}`.
pub fn detail_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(DETAIL_SCOPE)
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                HotelError::InvalidInput(err.to_string()).into()
            }))
            .configure(ratings::config)
            .configure(hotels::config),
    );
}

/// Parse a hotel id taken from the request path
pub fn parse_hotel_id(raw: &str) -> Result<Uuid, HotelError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(HotelError::InvalidInput("Hotel ID is required".to_string()));
    }

    Uuid::parse_str(raw).map_err(|_| HotelError::InvalidInput(format!("Invalid hotel ID: {}", raw)))
}
