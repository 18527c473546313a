//! Core types for Peppercorn.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod badge;
pub mod id;
pub mod rating;

pub use badge::Badge;
pub use id::*;
pub use rating::{ReviewRating, ReviewRatingError};
