//! Product repository.

use std::collections::HashMap;

use catalog_core::{CategoryId, Product, ProductDraft, ProductId, Review};
use tracing::instrument;

use super::{Store, StoreError};

/// Mean review rating per product. Products without reviews are absent.
pub type AverageRatings = HashMap<ProductId, f64>;

/// Repository for product operations.
pub struct ProductRepository<'a> {
    store: &'a Store,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// All products in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a writer panicked.
    pub fn list(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.store.read()?.products.clone())
    }

    /// Get a product by id. An unknown id is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a writer panicked.
    #[instrument(level = "debug", skip(self))]
    pub fn get(&self, id: &ProductId) -> Result<Option<Product>, StoreError> {
        let tables = self.store.read()?;
        Ok(tables.products.iter().find(|p| &p.id == id).cloned())
    }

    /// Products whose `category_id` names the given category, insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a writer panicked.
    pub fn by_category(&self, category_id: &CategoryId) -> Result<Vec<Product>, StoreError> {
        let tables = self.store.read()?;
        Ok(tables
            .products
            .iter()
            .filter(|p| p.in_category(category_id))
            .cloned()
            .collect())
    }

    /// Mean rating of every reviewed product, computed under one read lock.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a writer panicked.
    pub fn average_ratings(&self) -> Result<AverageRatings, StoreError> {
        let tables = self.store.read()?;
        Ok(tally(&tables.reviews))
    }

    /// Append a new product with a fresh id.
    ///
    /// The category reference is stored as given.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a writer panicked.
    pub fn insert(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        let product = Product::from_draft(ProductId::generate(), draft);
        self.store.write()?.products.push(product.clone());
        Ok(product)
    }

    /// Replace the writable fields of a product.
    ///
    /// Returns `Ok(None)` and leaves the store untouched if the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a writer panicked.
    pub fn update(
        &self,
        id: &ProductId,
        draft: ProductDraft,
    ) -> Result<Option<Product>, StoreError> {
        let mut tables = self.store.write()?;
        let Some(product) = tables.products.iter_mut().find(|p| &p.id == id) else {
            return Ok(None);
        };
        product.apply(draft);
        Ok(Some(product.clone()))
    }

    /// Remove a product together with its reviews.
    ///
    /// Returns `false` if nothing was removed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a writer panicked.
    pub fn remove(&self, id: &ProductId) -> Result<bool, StoreError> {
        let mut tables = self.store.write()?;
        let before = tables.products.len();
        tables.products.retain(|p| &p.id != id);
        if tables.products.len() == before {
            return Ok(false);
        }

        tables.reviews.retain(|r| &r.product_id != id);
        Ok(true)
    }
}

fn tally(reviews: &[Review]) -> AverageRatings {
    let mut sums: HashMap<&ProductId, (i64, u32)> = HashMap::new();
    for review in reviews {
        let entry = sums.entry(&review.product_id).or_insert((0, 0));
        entry.0 += i64::from(review.rating);
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(id, (sum, count))| {
            #[allow(clippy::cast_precision_loss)] // Rating sums stay far below 2^52
            let total = sum as f64;
            (id.clone(), total / f64::from(count))
        })
        .collect()
}
