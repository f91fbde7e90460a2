//! Catalog entities.
//!
//! Relationships are weak references by identifier: a product names its
//! category, a review names its product. Nothing here checks that the
//! referenced entity exists.

use serde::{Deserialize, Serialize};

use super::draft::{CategoryDraft, ProductDraft, ReviewDraft};
use super::id::{CategoryId, ProductId, ReviewId};

/// A product category (e.g. "Kitchen").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    /// Build a category from a draft and an assigned id.
    #[must_use]
    pub fn from_draft(id: CategoryId, draft: CategoryDraft) -> Self {
        Self {
            id,
            name: draft.name,
        }
    }

    /// Replace every writable field, keeping the id.
    pub fn apply(&mut self, draft: CategoryDraft) {
        self.name = draft.name;
    }
}

/// A product listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub quantity: i32,
    pub price: f64,
    pub on_sale: bool,
    /// Image reference (path or key), not a fetched asset.
    pub image: String,
    /// `None` means uncategorized.
    #[serde(default)]
    pub category_id: Option<CategoryId>,
}

impl Product {
    /// Build a product from a draft and an assigned id.
    #[must_use]
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            quantity: draft.quantity,
            price: draft.price,
            on_sale: draft.on_sale,
            image: draft.image,
            category_id: draft.category_id,
        }
    }

    /// Replace every writable field, keeping the id.
    pub fn apply(&mut self, draft: ProductDraft) {
        let id = self.id.clone();
        *self = Self::from_draft(id, draft);
    }

    /// Whether the product belongs to the given category.
    #[must_use]
    pub fn in_category(&self, category_id: &CategoryId) -> bool {
        self.category_id.as_ref() == Some(category_id)
    }
}

/// A customer review of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    /// ISO-like date string, stored as given.
    pub date: String,
    pub title: String,
    pub comment: String,
    /// Expected 1-5; not range checked.
    pub rating: i32,
    pub product_id: ProductId,
}

impl Review {
    /// Build a review from a draft and an assigned id.
    #[must_use]
    pub fn from_draft(id: ReviewId, draft: ReviewDraft) -> Self {
        Self {
            id,
            date: draft.date,
            title: draft.title,
            comment: draft.comment,
            rating: draft.rating,
            product_id: draft.product_id,
        }
    }

    /// Replace every writable field, keeping the id.
    pub fn apply(&mut self, draft: ReviewDraft) {
        let id = self.id.clone();
        *self = Self::from_draft(id, draft);
    }
}
