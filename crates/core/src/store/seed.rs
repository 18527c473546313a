//! Seed data injected at store construction.
//!
//! Unlike the insert payloads in [`crate::models`], seed rows carry the
//! server-owned fields verbatim: a demonstration catalog ships with ratings
//! and review counts that no stored review produced.

use rust_decimal::Decimal;

use crate::types::{Badge, ProductId, ReviewRating};

/// Initial contents for a [`super::CatalogStore`].
#[derive(Debug, Clone, Default)]
pub struct Seed {
    /// Categories, seeded first (IDs start at 1).
    pub categories: Vec<SeedCategory>,
    /// Products, seeded second (IDs start at 1).
    pub products: Vec<SeedProduct>,
    /// Reviews, seeded last; `product_id` refers to seed product order.
    pub reviews: Vec<SeedReview>,
}

/// A seeded category.
#[derive(Debug, Clone)]
pub struct SeedCategory {
    /// Category name.
    pub name: String,
    /// Active flag.
    pub is_active: bool,
}

/// A seeded product, including the normally server-derived fields.
#[derive(Debug, Clone)]
pub struct SeedProduct {
    /// Display name.
    pub name: String,
    /// Plain text description.
    pub description: String,
    /// Current price.
    pub price: Decimal,
    /// Pre-discount price.
    pub original_price: Option<Decimal>,
    /// Category name.
    pub category: String,
    /// Image URL.
    pub image_url: String,
    /// Average review score as shipped.
    pub rating: Decimal,
    /// Review count as shipped.
    pub review_count: i32,
    /// Promotional badge.
    pub badge: Option<Badge>,
    /// Favorite flag.
    pub is_favorite: bool,
}

/// A seeded review.
#[derive(Debug, Clone)]
pub struct SeedReview {
    /// Reviewed product (by seed order, first product is ID 1).
    pub product_id: ProductId,
    /// Reviewer display name.
    pub user_name: String,
    /// Star score.
    pub rating: ReviewRating,
    /// Free-text comment.
    pub comment: String,
}
