//! Category operations.

use crate::models::{Category, NewCategory};

use super::CatalogStore;

impl CatalogStore {
    /// List active categories in creation order.
    ///
    /// Inactive categories are soft-disabled: excluded here but never
    /// deleted, so products may keep referencing their names.
    #[must_use]
    pub fn list_categories(&self) -> Vec<Category> {
        self.collections()
            .categories
            .values()
            .filter(|c| c.is_active)
            .cloned()
            .collect()
    }

    /// Create a category. The active flag defaults to true.
    pub fn create_category(&self, new: NewCategory) -> Category {
        let mut inner = self.collections();
        let id = inner.next_category_id();
        let category = Category {
            id,
            name: new.name,
            is_active: new.is_active.unwrap_or(true),
        };
        inner.categories.insert(id, category.clone());
        category
    }
}
