//! Mutation root.
//!
//! Updates and deletes on unknown ids are not errors: updates resolve to
//! null, deletes to `false`.

use async_graphql::{Context, Error, ID, Object, Result};
use catalog_core::{CategoryId, ProductId, ReviewId};
use tracing::info;

use super::inputs::{
    AddCategoryInput, AddProductInput, AddReviewInput, UpdateCategoryInput, UpdateProductInput,
    UpdateReviewInput,
};
use super::types::{CategoryObject, ProductObject, ReviewObject};
use crate::error::add_breadcrumb;
use crate::store::Store;

/// Root of all write operations.
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// The input is nullable on the wire; a null input fails the field.
    async fn add_category(
        &self,
        ctx: &Context<'_>,
        input: Option<AddCategoryInput>,
    ) -> Result<CategoryObject> {
        let input = input.ok_or_else(|| Error::new("addCategory requires an input"))?;
        let store = ctx.data::<Store>()?;
        let category = store.categories().insert(input.into())?;
        info!(category_id = %category.id, "Category added");
        add_breadcrumb("mutation", "addCategory", Some(&[("id", category.id.as_str())]));
        Ok(CategoryObject(category))
    }

    async fn add_product(&self, ctx: &Context<'_>, input: AddProductInput) -> Result<ProductObject> {
        let store = ctx.data::<Store>()?;
        let product = store.products().insert(input.into())?;
        info!(product_id = %product.id, "Product added");
        add_breadcrumb("mutation", "addProduct", Some(&[("id", product.id.as_str())]));
        Ok(ProductObject(product))
    }

    async fn add_review(&self, ctx: &Context<'_>, input: AddReviewInput) -> Result<ReviewObject> {
        let store = ctx.data::<Store>()?;
        let review = store.reviews().insert(input.into())?;
        info!(review_id = %review.id, product_id = %review.product_id, "Review added");
        add_breadcrumb("mutation", "addReview", Some(&[("id", review.id.as_str())]));
        Ok(ReviewObject(review))
    }

    async fn delete_category(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let store = ctx.data::<Store>()?;
        let id = CategoryId::from(id.0);
        let removed = store.categories().remove(&id)?;
        info!(category_id = %id, removed, "Category delete");
        Ok(removed)
    }

    async fn delete_product(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let store = ctx.data::<Store>()?;
        let id = ProductId::from(id.0);
        let removed = store.products().remove(&id)?;
        info!(product_id = %id, removed, "Product delete");
        Ok(removed)
    }

    async fn delete_review(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let store = ctx.data::<Store>()?;
        let id = ReviewId::from(id.0);
        let removed = store.reviews().remove(&id)?;
        info!(review_id = %id, removed, "Review delete");
        Ok(removed)
    }

    async fn update_category(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateCategoryInput,
    ) -> Result<Option<CategoryObject>> {
        let store = ctx.data::<Store>()?;
        let id = CategoryId::from(id.0);
        let updated = store.categories().update(&id, input.into())?;
        info!(category_id = %id, found = updated.is_some(), "Category update");
        Ok(updated.map(CategoryObject))
    }

    async fn update_product(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateProductInput,
    ) -> Result<Option<ProductObject>> {
        let store = ctx.data::<Store>()?;
        let id = ProductId::from(id.0);
        let updated = store.products().update(&id, input.into())?;
        info!(product_id = %id, found = updated.is_some(), "Product update");
        Ok(updated.map(ProductObject))
    }

    async fn update_review(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateReviewInput,
    ) -> Result<Option<ReviewObject>> {
        let store = ctx.data::<Store>()?;
        let id = ReviewId::from(id.0);
        let updated = store.reviews().update(&id, input.into())?;
        info!(review_id = %id, found = updated.is_some(), "Review update");
        Ok(updated.map(ReviewObject))
    }
}
