//! Review repository.

use catalog_core::{ProductId, Review, ReviewDraft, ReviewId};

use super::{Store, StoreError};

/// Repository for review operations.
pub struct ReviewRepository<'a> {
    store: &'a Store,
}

impl<'a> ReviewRepository<'a> {
    /// Create a new review repository.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Get a review by id. An unknown id is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a writer panicked.
    pub fn get(&self, id: &ReviewId) -> Result<Option<Review>, StoreError> {
        let tables = self.store.read()?;
        Ok(tables.reviews.iter().find(|r| &r.id == id).cloned())
    }

    /// Reviews of one product, insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a writer panicked.
    pub fn by_product(&self, product_id: &ProductId) -> Result<Vec<Review>, StoreError> {
        let tables = self.store.read()?;
        Ok(tables
            .reviews
            .iter()
            .filter(|r| &r.product_id == product_id)
            .cloned()
            .collect())
    }

    /// Append a new review with a fresh id.
    ///
    /// The product reference and rating are stored as given.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a writer panicked.
    pub fn insert(&self, draft: ReviewDraft) -> Result<Review, StoreError> {
        let review = Review::from_draft(ReviewId::generate(), draft);
        self.store.write()?.reviews.push(review.clone());
        Ok(review)
    }

    /// Replace the writable fields of a review.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a writer panicked.
    pub fn update(&self, id: &ReviewId, draft: ReviewDraft) -> Result<Option<Review>, StoreError> {
        let mut tables = self.store.write()?;
        let Some(review) = tables.reviews.iter_mut().find(|r| &r.id == id) else {
            return Ok(None);
        };
        review.apply(draft);
        Ok(Some(review.clone()))
    }

    /// Remove a review. Returns `false` if nothing was removed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a writer panicked.
    pub fn remove(&self, id: &ReviewId) -> Result<bool, StoreError> {
        let mut tables = self.store.write()?;
        let before = tables.reviews.len();
        tables.reviews.retain(|r| &r.id != id);
        Ok(tables.reviews.len() != before)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use catalog_core::SeedData;

    use super::*;

    const SOCCER_BALL: &str = "47bf3941-9c8b-42c0-9c72-7f3985492a5b";

    fn draft(rating: i32) -> ReviewDraft {
        ReviewDraft {
            date: "2022-01-15".to_string(),
            title: "Bounces well".to_string(),
            comment: "Still round after a month".to_string(),
            rating,
            product_id: ProductId::new(SOCCER_BALL),
        }
    }

    #[test]
    fn test_by_product_order() {
        let store = Store::seeded();
        let titles: Vec<String> = store
            .reviews()
            .by_product(&ProductId::new(SOCCER_BALL))
            .unwrap()
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, ["Perfect", "Kids love it", "Nice ball"]);
    }

    #[test]
    fn test_insert_appends_to_product() {
        let store = Store::seeded();
        let created = store.reviews().insert(draft(3)).unwrap();

        let reviews = store.reviews().by_product(&ProductId::new(SOCCER_BALL)).unwrap();
        assert_eq!(reviews.last(), Some(&created));
        assert_eq!(store.reviews().get(&created.id).unwrap(), Some(created));
    }

    #[test]
    fn test_rating_is_not_range_checked() {
        let store = Store::new();
        let created = store.reviews().insert(draft(11)).unwrap();
        assert_eq!(created.rating, 11);
    }

    #[test]
    fn test_update_keeps_id() {
        let store = Store::seeded();
        let created = store.reviews().insert(draft(3)).unwrap();
        let updated = store.reviews().update(&created.id, draft(1)).unwrap().unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.rating, 1);
    }

    #[test]
    fn test_update_unknown_is_none() {
        let store = Store::seeded();
        let updated = store.reviews().update(&ReviewId::new("missing"), draft(1)).unwrap();
        assert!(updated.is_none());
        assert_eq!(store.snapshot().unwrap(), SeedData::builtin());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let store = Store::seeded();
        let created = store.reviews().insert(draft(3)).unwrap();

        assert!(store.reviews().remove(&created.id).unwrap());
        assert!(!store.reviews().remove(&created.id).unwrap());
        assert!(store.reviews().get(&created.id).unwrap().is_none());
    }
}
