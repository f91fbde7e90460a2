//! Category repository.

use catalog_core::{Category, CategoryDraft, CategoryId};
use tracing::instrument;

use super::{Store, StoreError};

/// Repository for category operations.
pub struct CategoryRepository<'a> {
    store: &'a Store,
}

impl<'a> CategoryRepository<'a> {
    /// Create a new category repository.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// All categories in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a writer panicked.
    pub fn list(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.store.read()?.categories.clone())
    }

    /// Get a category by id. An unknown id is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a writer panicked.
    #[instrument(level = "debug", skip(self))]
    pub fn get(&self, id: &CategoryId) -> Result<Option<Category>, StoreError> {
        let tables = self.store.read()?;
        Ok(tables.categories.iter().find(|c| &c.id == id).cloned())
    }

    /// Append a new category with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a writer panicked.
    pub fn insert(&self, draft: CategoryDraft) -> Result<Category, StoreError> {
        let category = Category::from_draft(CategoryId::generate(), draft);
        self.store.write()?.categories.push(category.clone());
        Ok(category)
    }

    /// Replace the writable fields of a category.
    ///
    /// Returns `Ok(None)` and leaves the store untouched if the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a writer panicked.
    pub fn update(
        &self,
        id: &CategoryId,
        draft: CategoryDraft,
    ) -> Result<Option<Category>, StoreError> {
        let mut tables = self.store.write()?;
        let Some(category) = tables.categories.iter_mut().find(|c| &c.id == id) else {
            return Ok(None);
        };
        category.apply(draft);
        Ok(Some(category.clone()))
    }

    /// Remove a category and detach its products.
    ///
    /// Products that referenced the category become uncategorized. Returns
    /// `false` if nothing was removed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a writer panicked.
    pub fn remove(&self, id: &CategoryId) -> Result<bool, StoreError> {
        let mut tables = self.store.write()?;
        let before = tables.categories.len();
        tables.categories.retain(|c| &c.id != id);
        if tables.categories.len() == before {
            return Ok(false);
        }

        for product in tables.products.iter_mut().filter(|p| p.in_category(id)) {
            product.category_id = None;
        }
        Ok(true)
    }
}
