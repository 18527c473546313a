//! Cart operations.

use crate::models::{CartItem, CartLine, NewCartItem};
use crate::types::CartItemId;

use super::CatalogStore;

impl CatalogStore {
    /// List a session's cart rows, each joined with its product.
    ///
    /// The join happens at read time; rows whose product has since been
    /// deleted are dropped from the result.
    #[must_use]
    pub fn cart_items(&self, session_id: &str) -> Vec<CartLine> {
        let inner = self.collections();
        inner
            .cart_items
            .values()
            .filter(|item| item.session_id == session_id)
            .filter_map(|item| {
                inner.products.get(&item.product_id).map(|product| CartLine {
                    item: item.clone(),
                    product: product.clone(),
                })
            })
            .collect()
    }

    /// Add a product to a session's cart.
    ///
    /// If the session already has a row for this product, the requested
    /// quantity (default 1) is added to it and the merged row is returned.
    /// Otherwise a new row is inserted.
    pub fn add_to_cart(&self, new: NewCartItem) -> CartItem {
        let mut inner = self.collections();
        let quantity = new.quantity.unwrap_or(1);

        if let Some(existing) = inner
            .cart_items
            .values_mut()
            .find(|item| item.product_id == new.product_id && item.session_id == new.session_id)
        {
            existing.quantity += quantity;
            return existing.clone();
        }

        let id = inner.next_cart_item_id();
        let item = CartItem {
            id,
            product_id: new.product_id,
            quantity,
            session_id: new.session_id,
        };
        inner.cart_items.insert(id, item.clone());
        item
    }

    /// Replace the quantity on a cart row. Returns `None` if the row does
    /// not exist.
    ///
    /// No clamping happens here; the HTTP boundary decides what a quantity
    /// below 1 means.
    pub fn update_cart_item(&self, id: CartItemId, quantity: i32) -> Option<CartItem> {
        let mut inner = self.collections();
        let item = inner.cart_items.get_mut(&id)?;
        item.quantity = quantity;
        Some(item.clone())
    }

    /// Delete a cart row. Returns whether a row existed to remove.
    pub fn remove_from_cart(&self, id: CartItemId) -> bool {
        self.collections().cart_items.remove(&id).is_some()
    }

    /// Delete all cart rows for a session, returning how many were removed.
    ///
    /// Clearing an empty session is not an error; other sessions are never
    /// touched.
    pub fn clear_cart(&self, session_id: &str) -> usize {
        let mut inner = self.collections();
        let before = inner.cart_items.len();
        inner
            .cart_items
            .retain(|_, item| item.session_id != session_id);
        before - inner.cart_items.len()
    }
}
