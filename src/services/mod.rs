// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod hotel_service;
pub mod rating_service;

pub use hotel_service::*;
pub use rating_service::*;
