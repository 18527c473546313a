//! The in-memory catalog store.
//!
//! [`CatalogStore`] is the authoritative, process-lifetime holder of the four
//! catalog collections (products, categories, reviews, cart items). It is the
//! only place that may touch the derived-state rules:
//!
//! - review creation recomputes the owning product's average rating and
//!   review count
//! - adding a product already present in a session's cart merges quantities
//!   instead of inserting a second row
//! - cart reads join rows to products at read time and drop orphans
//!
//! All collections live behind a single mutex, so each compound
//! read-modify-write operation is one critical section. Operations are
//! synchronous and never suspend while holding the lock.
//!
//! Collections are `BTreeMap`s keyed by monotonically assigned IDs, so
//! iteration order equals creation order. IDs are never reused, even after
//! deletes. Every operation returns owned snapshots.

mod cart;
mod categories;
mod filter;
mod products;
mod reviews;
mod seed;

pub use filter::{ALL_CATEGORIES, ProductFilter, SortKey};
pub use seed::{Seed, SeedCategory, SeedProduct, SeedReview};

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;

use crate::models::{CartItem, Category, Product, Review};
use crate::types::{CartItemId, CategoryId, ProductId, ReviewId};

/// The four catalog collections and their ID counters.
#[derive(Debug, Default)]
pub(crate) struct Collections {
    pub(crate) products: BTreeMap<ProductId, Product>,
    pub(crate) categories: BTreeMap<CategoryId, Category>,
    pub(crate) reviews: BTreeMap<ReviewId, Review>,
    pub(crate) cart_items: BTreeMap<CartItemId, CartItem>,
    next_product_id: i32,
    next_category_id: i32,
    next_review_id: i32,
    next_cart_item_id: i32,
}

impl Collections {
    pub(crate) fn next_product_id(&mut self) -> ProductId {
        self.next_product_id += 1;
        ProductId::new(self.next_product_id)
    }

    pub(crate) fn next_category_id(&mut self) -> CategoryId {
        self.next_category_id += 1;
        CategoryId::new(self.next_category_id)
    }

    pub(crate) fn next_review_id(&mut self) -> ReviewId {
        self.next_review_id += 1;
        ReviewId::new(self.next_review_id)
    }

    pub(crate) fn next_cart_item_id(&mut self) -> CartItemId {
        self.next_cart_item_id += 1;
        CartItemId::new(self.next_cart_item_id)
    }
}

/// Authoritative in-memory state of a Peppercorn shop.
///
/// Construct one per process (or per test) and share it behind the
/// application state. There is no ambient singleton.
#[derive(Debug, Default)]
pub struct CatalogStore {
    inner: Mutex<Collections>,
}

impl CatalogStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated from `seed`.
    ///
    /// Seed rows are trusted full-fidelity records: ratings, review counts,
    /// badges, and favorite flags are taken as given rather than derived.
    /// IDs are assigned in seed order starting at 1, and every row is
    /// stamped with the current time.
    #[must_use]
    pub fn with_seed(seed: Seed) -> Self {
        let store = Self::new();
        {
            let mut inner = store.collections();
            let now = Utc::now();

            for category in seed.categories {
                let id = inner.next_category_id();
                inner.categories.insert(
                    id,
                    Category {
                        id,
                        name: category.name,
                        is_active: category.is_active,
                    },
                );
            }

            for product in seed.products {
                let id = inner.next_product_id();
                inner.products.insert(
                    id,
                    Product {
                        id,
                        name: product.name,
                        description: product.description,
                        price: product.price,
                        original_price: product.original_price,
                        category: product.category,
                        image_url: product.image_url,
                        rating: product.rating,
                        review_count: product.review_count,
                        badge: product.badge,
                        is_favorite: product.is_favorite,
                        created_at: now,
                    },
                );
            }

            for review in seed.reviews {
                let id = inner.next_review_id();
                inner.reviews.insert(
                    id,
                    Review {
                        id,
                        product_id: review.product_id,
                        user_name: review.user_name,
                        rating: review.rating,
                        comment: review.comment,
                        created_at: now,
                    },
                );
            }
        }
        store
    }

    /// Lock the collections. Poisoning is recovered: the maps stay usable
    /// after a panicking writer.
    pub(crate) fn collections(&self) -> MutexGuard<'_, Collections> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
