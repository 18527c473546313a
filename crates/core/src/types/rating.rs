//! Review score type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`ReviewRating`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum ReviewRatingError {
    /// The score is outside the 1-5 star range.
    #[error("rating must be between 1 and 5, got {0}")]
    OutOfRange(i32),
}

/// An integer review score from 1 to 5 stars.
///
/// The range is enforced at construction, so any deserialized review payload
/// carrying an out-of-range score is rejected before it reaches the store.
///
/// ## Examples
///
/// ```
/// use peppercorn_core::ReviewRating;
///
/// assert!(ReviewRating::new(5).is_ok());
/// assert!(ReviewRating::new(0).is_err());
/// assert!(ReviewRating::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct ReviewRating(i32);

impl ReviewRating {
    /// Minimum allowed score.
    pub const MIN: i32 = 1;
    /// Maximum allowed score.
    pub const MAX: i32 = 5;

    /// Create a rating, validating the 1-5 range.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewRatingError::OutOfRange`] if `score` is not in 1..=5.
    pub const fn new(score: i32) -> Result<Self, ReviewRatingError> {
        if score < Self::MIN || score > Self::MAX {
            return Err(ReviewRatingError::OutOfRange(score));
        }
        Ok(Self(score))
    }

    /// Get the underlying score.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for ReviewRating {
    type Error = ReviewRatingError;

    fn try_from(score: i32) -> Result<Self, Self::Error> {
        Self::new(score)
    }
}

impl From<ReviewRating> for i32 {
    fn from(rating: ReviewRating) -> Self {
        rating.0
    }
}

impl fmt::Display for ReviewRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
