//! Product operations.

use chrono::Utc;
use rust_decimal::Decimal;

use crate::models::{NewProduct, Product, ProductUpdate};
use crate::types::ProductId;

use super::filter::{ALL_CATEGORIES, ProductFilter, SortKey};
use super::CatalogStore;

impl CatalogStore {
    /// List products matching `filter`, filtered before sorting.
    ///
    /// Never fails; an empty filter returns the whole catalog in creation
    /// order.
    #[must_use]
    pub fn list_products(&self, filter: &ProductFilter) -> Vec<Product> {
        let mut products: Vec<Product> = self.collections().products.values().cloned().collect();

        if let Some(category) = filter.category.as_deref() {
            if category != ALL_CATEGORIES {
                products.retain(|p| p.category == category);
            }
        }

        if let Some(search) = filter.search.as_deref() {
            let term = search.to_lowercase();
            products.retain(|p| {
                p.name.to_lowercase().contains(&term)
                    || p.description.to_lowercase().contains(&term)
            });
        }

        if let Some(min_price) = filter.min_price {
            products.retain(|p| p.price >= min_price);
        }

        if let Some(max_price) = filter.max_price {
            products.retain(|p| p.price <= max_price);
        }

        match filter.sort_by {
            Some(SortKey::PriceLowToHigh) => products.sort_by(|a, b| a.price.cmp(&b.price)),
            Some(SortKey::PriceHighToLow) => products.sort_by(|a, b| b.price.cmp(&a.price)),
            Some(SortKey::NameAToZ) => products.sort_by(|a, b| a.name.cmp(&b.name)),
            Some(SortKey::RatingHighToLow) => products.sort_by(|a, b| b.rating.cmp(&a.rating)),
            None => {}
        }

        products
    }

    /// Get a product by ID.
    #[must_use]
    pub fn get_product(&self, id: ProductId) -> Option<Product> {
        self.collections().products.get(&id).cloned()
    }

    /// Create a product.
    ///
    /// The server-owned fields are always set here: rating `0`, review count
    /// `0`, favorite `false`, creation time now.
    pub fn create_product(&self, new: NewProduct) -> Product {
        let mut inner = self.collections();
        let id = inner.next_product_id();
        let product = Product {
            id,
            name: new.name,
            description: new.description,
            price: new.price,
            original_price: new.original_price,
            category: new.category,
            image_url: new.image_url,
            rating: Decimal::ZERO,
            review_count: 0,
            badge: new.badge,
            is_favorite: false,
            created_at: Utc::now(),
        };
        inner.products.insert(id, product.clone());
        product
    }

    /// Merge `update` onto an existing product.
    ///
    /// Absent fields are unchanged. Derived fields (`rating`,
    /// `review_count`) cannot be reached through this path. Returns `None`
    /// if no product has this ID.
    pub fn update_product(&self, id: ProductId, update: ProductUpdate) -> Option<Product> {
        let mut inner = self.collections();
        let product = inner.products.get_mut(&id)?;

        if let Some(name) = update.name {
            product.name = name;
        }
        if let Some(description) = update.description {
            product.description = description;
        }
        if let Some(price) = update.price {
            product.price = price;
        }
        if let Some(original_price) = update.original_price {
            product.original_price = Some(original_price);
        }
        if let Some(category) = update.category {
            product.category = category;
        }
        if let Some(image_url) = update.image_url {
            product.image_url = image_url;
        }
        if let Some(badge) = update.badge {
            product.badge = Some(badge);
        }
        if let Some(is_favorite) = update.is_favorite {
            product.is_favorite = is_favorite;
        }

        Some(product.clone())
    }

    /// Delete a product. Returns whether a product existed to remove.
    ///
    /// Reviews and cart rows referencing the product are left in place;
    /// cart reads drop them at join time.
    pub fn delete_product(&self, id: ProductId) -> bool {
        self.collections().products.remove(&id).is_some()
    }

    /// Flip a product's favorite flag. Returns `None` if no product has
    /// this ID.
    pub fn toggle_favorite(&self, id: ProductId) -> Option<Product> {
        let mut inner = self.collections();
        let product = inner.products.get_mut(&id)?;
        product.is_favorite = !product.is_favorite;
        Some(product.clone())
    }
}
