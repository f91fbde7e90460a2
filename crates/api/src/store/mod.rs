//! In-memory catalog store.
//!
//! # Entity Sets
//!
//! - `categories` - Product categories, insertion order
//! - `products` - Products, each with an optional weak `category_id`
//! - `reviews` - Reviews, each with a weak `product_id`
//!
//! All three sets live behind one `RwLock`. Reads take the read lock; every
//! mutation takes the write lock once for its whole effect, cascades
//! included, so a concurrent reader never sees a half-applied write.
//!
//! # Referential Policy
//!
//! References are not checked on write. Reads that follow a dangling
//! reference resolve to `None`. Deleting a category detaches its products
//! (`category_id` becomes `None`); deleting a product removes its reviews.

mod categories;
mod products;
mod reviews;

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use catalog_core::{Category, Product, Review, SeedData};

pub use categories::CategoryRepository;
pub use products::{AverageRatings, ProductRepository};
pub use reviews::ReviewRepository;

/// Store errors.
///
/// Not-found is never an error; lookups return `Option` and deletes `bool`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store lock poisoned")]
    LockPoisoned,
}

/// The three entity sets.
#[derive(Debug, Default)]
struct Tables {
    categories: Vec<Category>,
    products: Vec<Product>,
    reviews: Vec<Review>,
}

/// Shared handle to the in-memory catalog.
///
/// Cheaply cloneable via `Arc`; every clone sees the same data.
#[derive(Debug, Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<Tables>>,
}

impl Store {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given seed document, order preserved.
    #[must_use]
    pub fn from_seed(seed: SeedData) -> Self {
        let SeedData {
            categories,
            products,
            reviews,
        } = seed;

        Self {
            inner: Arc::new(RwLock::new(Tables {
                categories,
                products,
                reviews,
            })),
        }
    }

    /// Create a store holding the built-in catalog.
    #[must_use]
    pub fn seeded() -> Self {
        Self::from_seed(SeedData::builtin())
    }

    /// Copy the current contents out as a seed document.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a writer panicked.
    pub fn snapshot(&self) -> Result<SeedData, StoreError> {
        let tables = self.read()?;
        Ok(SeedData {
            categories: tables.categories.clone(),
            products: tables.products.clone(),
            reviews: tables.reviews.clone(),
        })
    }

    /// Check that the store is usable (lock not poisoned).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a writer panicked.
    pub fn ping(&self) -> Result<(), StoreError> {
        self.read().map(|_| ())
    }

    /// Category operations.
    #[must_use]
    pub const fn categories(&self) -> CategoryRepository<'_> {
        CategoryRepository::new(self)
    }

    /// Product operations.
    #[must_use]
    pub const fn products(&self) -> ProductRepository<'_> {
        ProductRepository::new(self)
    }

    /// Review operations.
    #[must_use]
    pub const fn reviews(&self) -> ReviewRepository<'_> {
        ReviewRepository::new(self)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, StoreError> {
        self.inner.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, StoreError> {
        self.inner.write().map_err(|_| StoreError::LockPoisoned)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use catalog_core::{ProductId, ReviewDraft};

    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let store = Store::new();
        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot, SeedData::default());
    }

    #[test]
    fn test_seeded_snapshot_matches_builtin() {
        let store = Store::seeded();
        assert_eq!(store.snapshot().unwrap(), SeedData::builtin());
    }

    #[test]
    fn test_clones_share_data() {
        let store = Store::seeded();
        let other = store.clone();
        let kitchen = store.categories().list().unwrap()[0].id.clone();

        assert!(other.categories().remove(&kitchen).unwrap());
        assert!(store.categories().get(&kitchen).unwrap().is_none());
    }

    #[test]
    fn test_product_delete_is_atomic_with_concurrent_review_writes() {
        let store = Store::seeded();
        let shovel = ProductId::from("404daf2a-9b97-4b99-b9af-614d07f818d7");

        let writers: Vec<_> = (0..4)
            .map(|n| {
                let store = store.clone();
                let shovel = shovel.clone();
                std::thread::spawn(move || {
                    for i in 0..50 {
                        store
                            .reviews()
                            .insert(ReviewDraft {
                                date: "2024-01-01".to_string(),
                                title: format!("writer {n} review {i}"),
                                comment: "Concurrent".to_string(),
                                rating: 5,
                                product_id: shovel.clone(),
                            })
                            .unwrap();
                    }
                })
            })
            .collect();

        assert!(store.products().remove(&shovel).unwrap());
        // The cascade ran under the same lock as the delete
        let orphans_at_delete = store.reviews().by_product(&shovel).unwrap().len();

        for writer in writers {
            writer.join().unwrap();
        }

        let snapshot = store.snapshot().unwrap();
        assert!(snapshot.products.iter().all(|p| p.id != shovel));
        let late = snapshot
            .reviews
            .iter()
            .filter(|r| r.product_id == shovel)
            .count();
        assert!(late >= orphans_at_delete);
        assert!(late <= 200);
        // Other products keep their seeded reviews
        assert_eq!(
            snapshot.reviews.len() - late,
            SeedData::builtin().reviews.len() - 2
        );
    }

    #[test]
    fn test_poisoned_lock_is_reported() {
        let store = Store::seeded();
        let poisoner = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.inner.write().unwrap();
            panic!("poison the store");
        })
        .join();

        assert!(matches!(store.ping(), Err(StoreError::LockPoisoned)));
        assert!(matches!(
            store.products().list(),
            Err(StoreError::LockPoisoned)
        ));
    }
}
