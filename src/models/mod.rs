// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod hotel;
pub mod rating;
pub mod room;
pub mod user;

pub use hotel::*;
pub use rating::*;
pub use room::*;
pub use user::*;
