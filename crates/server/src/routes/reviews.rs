//! Review route handlers.
//!
//! Reviews are addressed through their product
//! (`/api/products/{id}/reviews`), but the store does not require the
//! product to exist: a review posted against a deleted product is stored
//! and the rating side effect is skipped.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::instrument;

use peppercorn_core::{NewReview, ProductId, Review, ReviewRating};

use crate::state::AppState;

/// Create review request body; the product id comes from the path.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    /// Reviewer display name.
    pub user_name: String,
    /// Star score; out-of-range values are rejected at deserialization.
    pub rating: ReviewRating,
    /// Free-text comment.
    pub comment: String,
}

/// List a product's reviews in creation order.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> Json<Vec<Review>> {
    Json(state.store().list_reviews(product_id))
}

/// Create a review and recompute the product's rating aggregates.
#[instrument(skip(state, payload))]
pub async fn create(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
    Json(payload): Json<CreateReviewRequest>,
) -> (StatusCode, Json<Review>) {
    let review = state.store().create_review(NewReview {
        product_id,
        user_name: payload.user_name,
        rating: payload.rating,
        comment: payload.comment,
    });
    tracing::info!(review_id = %review.id, product_id = %product_id, "Review created");
    (StatusCode::CREATED, Json(review))
}
