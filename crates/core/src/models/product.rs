//! Product entity and payload types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Badge, ProductId};

/// A catalog product.
///
/// `rating` and `review_count` are derived fields: they always equal the
/// aggregate of the reviews referencing this product and are recomputed by
/// the store on review creation, never set by clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product ID, assigned at creation and never reused.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Plain text description.
    pub description: String,
    /// Current price, serialized as an exact decimal string.
    pub price: Decimal,
    /// Pre-discount price, shown struck through when present.
    pub original_price: Option<Decimal>,
    /// Category name (free-text reference, not a foreign key).
    pub category: String,
    /// Image URL or inline data URI.
    pub image_url: String,
    /// Average review score, one decimal place once any review exists.
    pub rating: Decimal,
    /// Number of reviews referencing this product.
    pub review_count: i32,
    /// Promotional badge, if any.
    pub badge: Option<Badge>,
    /// Whether the operator has marked this product as a favorite.
    pub is_favorite: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a product.
///
/// Server-owned fields (`id`, `rating`, `reviewCount`, `isFavorite`,
/// `createdAt`) have no counterpart here: whatever a client sends for them
/// is ignored, and the store fills in the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    /// Display name.
    pub name: String,
    /// Plain text description.
    pub description: String,
    /// Current price.
    pub price: Decimal,
    /// Pre-discount price.
    #[serde(default)]
    pub original_price: Option<Decimal>,
    /// Category name.
    pub category: String,
    /// Image URL or inline data URI.
    pub image_url: String,
    /// Promotional badge.
    #[serde(default)]
    pub badge: Option<Badge>,
}

/// Partial update for a product.
///
/// Absent fields are left unchanged. Derived fields have no counterpart
/// here, so no update can overwrite `rating` or `reviewCount`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    /// New display name.
    #[serde(default)]
    pub name: Option<String>,
    /// New description.
    #[serde(default)]
    pub description: Option<String>,
    /// New price.
    #[serde(default)]
    pub price: Option<Decimal>,
    /// New pre-discount price.
    #[serde(default)]
    pub original_price: Option<Decimal>,
    /// New category name.
    #[serde(default)]
    pub category: Option<String>,
    /// New image URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// New badge.
    #[serde(default)]
    pub badge: Option<Badge>,
    /// New favorite flag.
    #[serde(default)]
    pub is_favorite: Option<bool>,
}

impl ProductUpdate {
    /// Whether the update carries no changes at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.original_price.is_none()
            && self.category.is_none()
            && self.image_url.is_none()
            && self.badge.is_none()
            && self.is_favorite.is_none()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_product_serializes_camel_case_with_string_price() {
        let product = Product {
            id: ProductId::new(1),
            name: "Vintage Camera".to_string(),
            description: "Classic vintage camera.".to_string(),
            price: dec!(349.00),
            original_price: None,
            category: "Electronics".to_string(),
            image_url: "https://example.com/camera.jpg".to_string(),
            rating: dec!(4.9),
            review_count: 34,
            badge: Some(Badge::Vintage),
            is_favorite: false,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&product).expect("serialize");
        assert_eq!(json["price"], "349.00");
        assert_eq!(json["rating"], "4.9");
        assert_eq!(json["reviewCount"], 34);
        assert_eq!(json["imageUrl"], "https://example.com/camera.jpg");
        assert_eq!(json["badge"], "Vintage");
        assert_eq!(json["originalPrice"], serde_json::Value::Null);
    }

    #[test]
    fn test_new_product_ignores_server_owned_fields() {
        // A client trying to smuggle in a rating just has the field dropped.
        let payload: NewProduct = serde_json::from_str(
            r#"{
                "name": "Desk Lamp",
                "description": "Warm light",
                "price": "39.50",
                "category": "Home",
                "imageUrl": "https://example.com/lamp.jpg",
                "rating": "5.0",
                "reviewCount": 900,
                "isFavorite": true
            }"#,
        )
        .expect("deserialize");

        assert_eq!(payload.price, dec!(39.50));
        assert!(payload.original_price.is_none());
        assert!(payload.badge.is_none());
    }

    #[test]
    fn test_empty_update() {
        let update: ProductUpdate = serde_json::from_str("{}").expect("deserialize");
        assert!(update.is_empty());

        let update: ProductUpdate =
            serde_json::from_str(r#"{"price": "10.00"}"#).expect("deserialize");
        assert!(!update.is_empty());
    }
}
