//! Write-side inputs.
//!
//! A draft carries every writable field of an entity. Inserts turn a draft
//! into an entity with a fresh id; updates replace all writable fields of an
//! existing entity with the draft's values.

use serde::{Deserialize, Serialize};

use super::id::{CategoryId, ProductId};

/// Writable fields of a [`Category`](super::Category).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub name: String,
}

/// Writable fields of a [`Product`](super::Product).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub quantity: i32,
    pub image: String,
    pub price: f64,
    pub on_sale: bool,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
}

/// Writable fields of a [`Review`](super::Review).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDraft {
    pub date: String,
    pub title: String,
    pub comment: String,
    pub rating: i32,
    pub product_id: ProductId,
}
