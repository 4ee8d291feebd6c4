//! Catalog query engine and seed data

pub mod filter;
pub mod seed;

pub use filter::{ALL_CATEGORIES, InvalidPriceRange, PriceRange, ProductFilter, ProductPage, SortKey, apply};
