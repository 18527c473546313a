//! Cart entity and payload types.

use serde::{Deserialize, Serialize};

use crate::models::Product;
use crate::types::{CartItemId, ProductId};

/// A cart row: one product in one anonymous session's cart.
///
/// At most one row exists per `(session_id, product_id)` pair; adding the
/// same product again merges quantities instead of inserting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Cart row ID.
    pub id: CartItemId,
    /// Product in the cart.
    pub product_id: ProductId,
    /// Quantity of the product.
    pub quantity: i32,
    /// Opaque client-generated session token.
    pub session_id: String,
}

/// Payload for adding a product to a cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCartItem {
    /// Product to add.
    pub product_id: ProductId,
    /// Quantity to add; defaults to 1 when unspecified.
    #[serde(default)]
    pub quantity: Option<i32>,
    /// Opaque client-generated session token.
    pub session_id: String,
}

/// A cart row joined with its product at read time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    /// The cart row.
    #[serde(flatten)]
    pub item: CartItem,
    /// Snapshot of the referenced product.
    pub product: Product,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_new_cart_item_quantity_optional() {
        let payload: NewCartItem =
            serde_json::from_str(r#"{"productId": 3, "sessionId": "s-abc"}"#)
                .expect("deserialize");
        assert_eq!(payload.product_id, ProductId::new(3));
        assert!(payload.quantity.is_none());
    }

    #[test]
    fn test_cart_line_flattens_row_fields() {
        let line = CartLine {
            item: CartItem {
                id: CartItemId::new(1),
                product_id: ProductId::new(3),
                quantity: 2,
                session_id: "s-abc".to_string(),
            },
            product: Product {
                id: ProductId::new(3),
                name: "Mug".to_string(),
                description: "Stoneware mug".to_string(),
                price: dec!(14.00),
                original_price: None,
                category: "Home".to_string(),
                image_url: "https://example.com/mug.jpg".to_string(),
                rating: dec!(0),
                review_count: 0,
                badge: None,
                is_favorite: false,
                created_at: Utc::now(),
            },
        };

        let json = serde_json::to_value(&line).expect("serialize");
        assert_eq!(json["id"], 1);
        assert_eq!(json["quantity"], 2);
        assert_eq!(json["sessionId"], "s-abc");
        assert_eq!(json["product"]["name"], "Mug");
    }
}
