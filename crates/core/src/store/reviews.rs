//! Review operations and the rating recomputation rule.

use chrono::Utc;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{NewReview, Review};
use crate::types::ProductId;

use super::CatalogStore;

impl CatalogStore {
    /// List reviews for a product in creation order.
    #[must_use]
    pub fn list_reviews(&self, product_id: ProductId) -> Vec<Review> {
        self.collections()
            .reviews
            .values()
            .filter(|r| r.product_id == product_id)
            .cloned()
            .collect()
    }

    /// Create a review, then recompute the owning product's aggregates.
    ///
    /// `review_count` becomes the count of all reviews for the product
    /// (including the new one) and `rating` their mean, at one decimal
    /// place. If the product does not exist the review is stored anyway and
    /// the recomputation is skipped.
    pub fn create_review(&self, new: NewReview) -> Review {
        let mut inner = self.collections();
        let id = inner.next_review_id();
        let review = Review {
            id,
            product_id: new.product_id,
            user_name: new.user_name,
            rating: new.rating,
            comment: new.comment,
            created_at: Utc::now(),
        };
        inner.reviews.insert(id, review.clone());

        let ratings: Vec<i32> = inner
            .reviews
            .values()
            .filter(|r| r.product_id == review.product_id)
            .map(|r| r.rating.as_i32())
            .collect();

        if let Some(product) = inner.products.get_mut(&review.product_id) {
            product.review_count = i32::try_from(ratings.len()).unwrap_or(i32::MAX);
            product.rating = average_rating(&ratings);
        }

        review
    }
}

/// Mean of the scores at one decimal place, midpoints rounded away from
/// zero (the storefront shows `4.25` as `4.3`).
fn average_rating(ratings: &[i32]) -> Decimal {
    if ratings.is_empty() {
        return Decimal::ZERO;
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    let count = i64::try_from(ratings.len()).unwrap_or(i64::MAX);
    let mut average = (Decimal::from(sum) / Decimal::from(count))
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    average.rescale(1);
    average
}
