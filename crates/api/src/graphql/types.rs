//! GraphQL object types.
//!
//! Each object wraps a core entity. Scalar fields read straight from the
//! entity; relationship fields look up the store held in the schema data.

use async_graphql::{Context, ID, Object, Result};
use catalog_core::{Category, Product, Review};

use super::filter_products;
use super::inputs::ProductsFilterInput;
use crate::store::Store;

/// `Category` object.
#[derive(Debug, Clone)]
pub struct CategoryObject(pub Category);

#[Object(name = "Category")]
impl CategoryObject {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    /// Products in this category, optionally filtered.
    async fn products(
        &self,
        ctx: &Context<'_>,
        filter: Option<ProductsFilterInput>,
    ) -> Result<Vec<ProductObject>> {
        let store = ctx.data::<Store>()?;
        let products = store.products().by_category(&self.0.id)?;
        filter_products(store, products, filter)
    }
}

/// `Product` object.
#[derive(Debug, Clone)]
pub struct ProductObject(pub Product);

#[Object(name = "Product")]
impl ProductObject {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn description(&self) -> &str {
        &self.0.description
    }

    async fn quantity(&self) -> i32 {
        self.0.quantity
    }

    async fn price(&self) -> f64 {
        self.0.price
    }

    async fn on_sale(&self) -> bool {
        self.0.on_sale
    }

    async fn image(&self) -> &str {
        &self.0.image
    }

    /// The product's category; null when uncategorized or the category is gone.
    async fn category(&self, ctx: &Context<'_>) -> Result<Option<CategoryObject>> {
        let Some(category_id) = &self.0.category_id else {
            return Ok(None);
        };
        let store = ctx.data::<Store>()?;
        Ok(store.categories().get(category_id)?.map(CategoryObject))
    }

    async fn reviews(&self, ctx: &Context<'_>) -> Result<Vec<ReviewObject>> {
        let store = ctx.data::<Store>()?;
        let reviews = store.reviews().by_product(&self.0.id)?;
        Ok(reviews.into_iter().map(ReviewObject).collect())
    }
}

/// `Review` object.
#[derive(Debug, Clone)]
pub struct ReviewObject(pub Review);

#[Object(name = "Review")]
impl ReviewObject {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn date(&self) -> &str {
        &self.0.date
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    async fn comment(&self) -> &str {
        &self.0.comment
    }

    async fn rating(&self) -> i32 {
        self.0.rating
    }
}
