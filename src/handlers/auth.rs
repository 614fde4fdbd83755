// src/handlers/auth.rs
// DOCUMENTATION: Bearer token authentication
// PURPOSE: Resolve the signed-in user before a protected handler runs

use crate::config::Config;
use crate::errors::HotelError;
use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::future::{ready, Ready};
use uuid::Uuid;

/// JWT claims issued by the auth service
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: Uuid,
    /// Expiry, seconds since the Unix epoch
    pub exp: u64,
}

/// Extractor for the user behind `Authorization: Bearer <token>`
/// DOCUMENTATION: Add it as a handler argument to require authentication;
/// requests without a valid token are rejected with 401
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

impl FromRequest for AuthenticatedUser {
    type Error = HotelError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, HotelError> {
    let config = req.app_data::<web::Data<Config>>().ok_or_else(|| {
        log::error!("Config missing from application state");
        HotelError::InternalError
    })?;

    let header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            log::warn!("Request to {} without Authorization header", req.path());
            HotelError::Unauthorized("missing bearer token".to_string())
        })?;

    let token = header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| HotelError::Unauthorized("malformed Authorization header".to_string()))?;

    let user_id = verify_token(token, &config.jwt_secret)?;
    Ok(AuthenticatedUser { user_id })
}

/// Verify an HS256 token and return its subject
pub fn verify_token(token: &str, secret: &str) -> Result<Uuid, HotelError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims.sub)
    .map_err(|e| {
        log::warn!("Rejected bearer token: {}", e);
        HotelError::Unauthorized("invalid or expired token".to_string())
    })
}
