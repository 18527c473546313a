//! Product listing filter and sort options.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Category filter value that disables category filtering.
///
/// The storefront's category dropdown sends this literal string when no
/// category is selected.
pub const ALL_CATEGORIES: &str = "All Categories";

/// Sort orders for product listings.
///
/// The serialized form is the storefront's sort dropdown label, which is
/// passed through as the `sortBy` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Ascending by price.
    #[serde(rename = "Price: Low to High")]
    PriceLowToHigh,
    /// Descending by price.
    #[serde(rename = "Price: High to Low")]
    PriceHighToLow,
    /// Ascending lexicographic by name.
    #[serde(rename = "Name: A to Z")]
    NameAToZ,
    /// Descending by average rating.
    #[serde(rename = "Rating: High to Low")]
    RatingHighToLow,
}

/// Filter and sort options for listing products.
///
/// Every criterion is optional; an empty filter returns the whole catalog in
/// creation order. Filters apply before sorting.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    /// Exact category name match; [`ALL_CATEGORIES`] or absent matches all.
    #[serde(default)]
    pub category: Option<String>,
    /// Case-insensitive substring match against name or description.
    #[serde(default)]
    pub search: Option<String>,
    /// Inclusive lower price bound.
    #[serde(default)]
    pub min_price: Option<Decimal>,
    /// Inclusive upper price bound.
    #[serde(default)]
    pub max_price: Option<Decimal>,
    /// Sort order; absent keeps creation order.
    #[serde(default)]
    pub sort_by: Option<SortKey>,
}
