//! Shared types for the catalog workspace
//!
//! Domain models, the canonical filter/sort engine, the seed catalog and the
//! unified error system used by both `catalog-server` and `catalog-client`.

pub mod catalog;
pub mod error;
pub mod models;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use catalog::{PriceRange, ProductFilter, ProductPage, SortKey};
pub use models::{Category, Price, Product, ProductCreate, ProductUpdate};
