//! Core types for the catalog.
//!
//! This module provides type-safe wrappers and records for the three entity
//! sets: categories, products, and reviews.

pub mod draft;
pub mod entity;
pub mod id;

pub use draft::{CategoryDraft, ProductDraft, ReviewDraft};
pub use entity::{Category, Product, Review};
pub use id::*;
