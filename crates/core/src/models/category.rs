//! Category entity and payload types.

use serde::{Deserialize, Serialize};

use crate::types::CategoryId;

/// A product category.
///
/// Categories are soft-disabled rather than deleted: listing only returns
/// active ones, but products keep referencing inactive names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Category ID.
    pub id: CategoryId,
    /// Unique category name.
    pub name: String,
    /// Whether the category is shown in listings.
    pub is_active: bool,
}

/// Payload for creating a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    /// Category name.
    pub name: String,
    /// Active flag; defaults to true when unspecified.
    #[serde(default)]
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category_active_defaults_to_absent() {
        let payload: NewCategory =
            serde_json::from_str(r#"{"name": "Garden"}"#).expect("deserialize");
        assert_eq!(payload.name, "Garden");
        assert!(payload.is_active.is_none());
    }

    #[test]
    fn test_category_wire_shape() {
        let category = Category {
            id: CategoryId::new(2),
            name: "Clothing".to_string(),
            is_active: true,
        };
        let json = serde_json::to_value(&category).expect("serialize");
        assert_eq!(json["id"], 2);
        assert_eq!(json["isActive"], true);
    }
}
