//! GraphQL input types and their conversions into core drafts.
//!
//! Required fields are enforced by the engine's input coercion before any
//! resolver runs; conversions here are infallible.

use async_graphql::{ID, InputObject};
use catalog_core::{CategoryDraft, CategoryId, ProductDraft, ProductId, ReviewDraft};

use crate::filter::ProductFilter;

/// Optional criteria for product listings.
#[derive(Debug, Default, Clone, Copy, InputObject)]
pub struct ProductsFilterInput {
    pub on_sale: Option<bool>,
    pub avg_rating: Option<i32>,
}

impl From<ProductsFilterInput> for ProductFilter {
    fn from(input: ProductsFilterInput) -> Self {
        Self {
            on_sale: input.on_sale,
            avg_rating: input.avg_rating,
        }
    }
}

#[derive(Debug, Clone, InputObject)]
pub struct AddCategoryInput {
    pub name: String,
}

#[derive(Debug, Clone, InputObject)]
pub struct UpdateCategoryInput {
    pub name: String,
}

impl From<AddCategoryInput> for CategoryDraft {
    fn from(input: AddCategoryInput) -> Self {
        Self { name: input.name }
    }
}

impl From<UpdateCategoryInput> for CategoryDraft {
    fn from(input: UpdateCategoryInput) -> Self {
        Self { name: input.name }
    }
}

#[derive(Debug, Clone, InputObject)]
pub struct AddProductInput {
    pub name: String,
    pub description: String,
    pub quantity: i32,
    pub image: String,
    pub price: f64,
    pub on_sale: bool,
    /// Category to file the product under; not checked for existence.
    pub category_id: Option<String>,
}

#[derive(Debug, Clone, InputObject)]
pub struct UpdateProductInput {
    pub name: String,
    pub description: String,
    pub quantity: i32,
    pub image: String,
    pub price: f64,
    pub on_sale: bool,
    /// Omitting this leaves the product uncategorized.
    pub category_id: Option<String>,
}

impl From<AddProductInput> for ProductDraft {
    fn from(input: AddProductInput) -> Self {
        Self {
            name: input.name,
            description: input.description,
            quantity: input.quantity,
            image: input.image,
            price: input.price,
            on_sale: input.on_sale,
            category_id: input.category_id.map(CategoryId::from),
        }
    }
}

impl From<UpdateProductInput> for ProductDraft {
    fn from(input: UpdateProductInput) -> Self {
        Self {
            name: input.name,
            description: input.description,
            quantity: input.quantity,
            image: input.image,
            price: input.price,
            on_sale: input.on_sale,
            category_id: input.category_id.map(CategoryId::from),
        }
    }
}

#[derive(Debug, Clone, InputObject)]
pub struct AddReviewInput {
    pub date: String,
    pub title: String,
    pub comment: String,
    pub rating: i32,
    pub product_id: ID,
}

#[derive(Debug, Clone, InputObject)]
pub struct UpdateReviewInput {
    pub date: String,
    pub title: String,
    pub comment: String,
    pub rating: i32,
    pub product_id: ID,
}

impl From<AddReviewInput> for ReviewDraft {
    fn from(input: AddReviewInput) -> Self {
        Self {
            date: input.date,
            title: input.title,
            comment: input.comment,
            rating: input.rating,
            product_id: ProductId::from(input.product_id.0),
        }
    }
}

impl From<UpdateReviewInput> for ReviewDraft {
    fn from(input: UpdateReviewInput) -> Self {
        Self {
            date: input.date,
            title: input.title,
            comment: input.comment,
            rating: input.rating,
            product_id: ProductId::from(input.product_id.0),
        }
    }
}
