//! Catalog Core - Shared domain types.
//!
//! This crate provides the types used across all catalog components:
//! - `api` - GraphQL server over the in-memory store
//! - `cli` - Schema export, seed inspection, one-off operations
//!
//! # Architecture
//!
//! The core crate contains only types and static seed data - no locking, no
//! HTTP, no GraphQL. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Typed IDs, catalog entities, and write-side drafts
//! - [`seed`] - The seed document format and the built-in catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod seed;
pub mod types;

pub use seed::SeedData;
pub use types::*;
