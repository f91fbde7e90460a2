//! GraphQL schema for the catalog.
//!
//! # Example Operations
//!
//! ```graphql
//! # Categories with their on-sale products
//! query {
//!   categories {
//!     name
//!     products(filter: { onSale: true }) { name price }
//!   }
//! }
//!
//! # Well-reviewed products and their reviews
//! query {
//!   products(filter: { avgRating: 4 }) {
//!     name
//!     category { name }
//!     reviews { title rating }
//!   }
//! }
//!
//! # Add a review
//! mutation {
//!   addReview(input: {
//!     date: "2022-01-15", title: "Great", comment: "Works", rating: 5,
//!     productId: "404daf2a-9b97-4b99-b9af-614d07f818d7"
//!   }) { id }
//! }
//! ```
//!
//! The store is injected as schema data; resolvers fetch it with
//! `ctx.data::<Store>()`.

pub mod inputs;
pub mod mutation;
pub mod query;
pub mod types;

use async_graphql::{EmptySubscription, Result, Schema};
use catalog_core::Product;

use crate::filter::{self, ProductFilter};
use crate::store::{AverageRatings, Store};

use self::inputs::ProductsFilterInput;
use self::mutation::MutationRoot;
use self::query::QueryRoot;
use self::types::ProductObject;

pub use self::query::GREETING;

/// The full GraphQL schema type for the catalog.
pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Default maximum query nesting depth.
pub const DEFAULT_DEPTH_LIMIT: usize = 10;

/// Build the GraphQL schema over the given store.
pub fn build_schema(store: Store, depth_limit: usize) -> CatalogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .limit_depth(depth_limit)
        .finish()
}

/// Render the schema as SDL.
#[must_use]
pub fn sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}

/// Narrow a product listing by an optional GraphQL filter.
///
/// Review averages are only computed when the filter asks for them.
fn filter_products(
    store: &Store,
    products: Vec<Product>,
    filter: Option<ProductsFilterInput>,
) -> Result<Vec<ProductObject>> {
    let filter = filter.map(ProductFilter::from);
    let ratings = match filter {
        Some(f) if f.needs_ratings() => store.products().average_ratings()?,
        _ => AverageRatings::new(),
    };

    Ok(filter::apply(products, filter.as_ref(), &ratings)
        .into_iter()
        .map(ProductObject)
        .collect())
}
