//! Query root.

use async_graphql::{Context, ID, Object, Result};
use catalog_core::{CategoryId, ProductId};

use super::filter_products;
use super::inputs::ProductsFilterInput;
use super::types::{CategoryObject, ProductObject};
use crate::store::Store;

/// The fixed greeting returned by `hello`.
pub const GREETING: &str = "Hello World!";

/// Root of all read operations.
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn hello(&self) -> Option<&'static str> {
        Some(GREETING)
    }

    /// All products, optionally filtered.
    async fn products(
        &self,
        ctx: &Context<'_>,
        filter: Option<ProductsFilterInput>,
    ) -> Result<Vec<ProductObject>> {
        let store = ctx.data::<Store>()?;
        let products = store.products().list()?;
        filter_products(store, products, filter)
    }

    async fn product(&self, ctx: &Context<'_>, id: ID) -> Result<Option<ProductObject>> {
        let store = ctx.data::<Store>()?;
        Ok(store.products().get(&ProductId::from(id.0))?.map(ProductObject))
    }

    async fn categories(&self, ctx: &Context<'_>) -> Result<Vec<CategoryObject>> {
        let store = ctx.data::<Store>()?;
        let categories = store.categories().list()?;
        Ok(categories.into_iter().map(CategoryObject).collect())
    }

    async fn category(&self, ctx: &Context<'_>, id: ID) -> Result<Option<CategoryObject>> {
        let store = ctx.data::<Store>()?;
        Ok(store
            .categories()
            .get(&CategoryId::from(id.0))?
            .map(CategoryObject))
    }
}
