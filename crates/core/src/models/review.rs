//! Review entity and payload types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{ProductId, ReviewId, ReviewRating};

/// A product review.
///
/// The product reference is not enforced: a review may outlive its product
/// and remain orphaned after a product delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Review ID.
    pub id: ReviewId,
    /// Reviewed product.
    pub product_id: ProductId,
    /// Reviewer display name.
    pub user_name: String,
    /// Star score, 1-5.
    pub rating: ReviewRating,
    /// Free-text comment.
    pub comment: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a review.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    /// Reviewed product.
    pub product_id: ProductId,
    /// Reviewer display name.
    pub user_name: String,
    /// Star score, 1-5.
    pub rating: ReviewRating,
    /// Free-text comment.
    pub comment: String,
}
