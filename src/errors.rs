// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

/// Application-specific error types
/// DOCUMENTATION: Every failure a handler can return
/// Each variant maps to one HTTP status code and a stable error code
#[derive(Error, Debug)]
pub enum HotelError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Hotel not found: {0}")]
    HotelNotFound(Uuid),

    #[error("You have not rated this hotel yet")]
    RatingNotFound,

    #[error("You have already rated this hotel")]
    AlreadyRated,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal server error")]
    InternalError,
}

impl HotelError {
    /// Stable machine-readable code sent alongside the message
    pub fn code(&self) -> &'static str {
        match self {
            HotelError::InvalidInput(_) => "INVALID_INPUT",
            HotelError::ValidationError(_) => "VALIDATION_ERROR",
            HotelError::HotelNotFound(_) => "HOTEL_NOT_FOUND",
            HotelError::RatingNotFound => "RATING_NOT_FOUND",
            HotelError::AlreadyRated => "ALREADY_RATED",
            HotelError::Unauthorized(_) => "UNAUTHORIZED",
            HotelError::DatabaseError(_) => "DATABASE_ERROR",
            HotelError::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Message shown to API consumers
    /// Server-side failures never leak driver details; those go to the log.
    pub fn public_message(&self) -> String {
        match self {
            HotelError::DatabaseError(_) | HotelError::InternalError => {
                "Server error".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl From<validator::ValidationErrors> for HotelError {
    fn from(err: validator::ValidationErrors) -> Self {
        HotelError::ValidationError(err.to_string())
    }
}

/// Convert HotelError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for HotelError {
    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("Request failed: {}", self);
        }

        let body = json!({
            "error": {
                "code": self.code(),
                "message": self.public_message(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            HotelError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            HotelError::ValidationError(_) => StatusCode::BAD_REQUEST,
            HotelError::HotelNotFound(_) => StatusCode::NOT_FOUND,
            HotelError::RatingNotFound => StatusCode::NOT_FOUND,
            // Duplicate ratings are reported as a bad request, not 409
            HotelError::AlreadyRated => StatusCode::BAD_REQUEST,
            HotelError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            HotelError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            HotelError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_variants_share_status_but_not_message() {
        let hotel = HotelError::HotelNotFound(Uuid::nil());
        let rating = HotelError::RatingNotFound;

        assert_eq!(hotel.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(rating.status_code(), StatusCode::NOT_FOUND);
        assert_ne!(hotel.public_message(), rating.public_message());
        assert_ne!(hotel.code(), rating.code());
    }

    #[test]
    fn test_duplicate_rating_is_bad_request() {
        assert_eq!(HotelError::AlreadyRated.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_database_error_hides_details() {
        let err = HotelError::DatabaseError("connection refused on 10.0.0.3".to_string());

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Server error");
    }
}
