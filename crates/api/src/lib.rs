//! Catalog API library.
//!
//! The GraphQL server as a library, so the binary, the CLI, and the
//! integration tests share one implementation.
//!
//! # Modules
//!
//! - [`store`] - In-memory catalog with per-entity repositories
//! - [`filter`] - Product listing filters
//! - [`graphql`] - Schema, object types, and resolvers
//! - [`routes`] / [`middleware`] - HTTP surface
//! - [`seed`] - Seed document loading

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod filter;
pub mod graphql;
pub mod middleware;
pub mod routes;
pub mod seed;
pub mod state;
pub mod store;
