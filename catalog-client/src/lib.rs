//! Catalog Client - data layer for storefront frontends
//!
//! - [`CatalogApi`] - the catalog operations, implemented over HTTP
//!   ([`HttpCatalogApi`]) and in process ([`MockCatalogApi`])
//! - [`ProductsQuery`] / [`CategoriesQuery`] - memoized, cached queries that
//!   publish loading state through a watch channel

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod mock;
pub mod query;

pub use api::CatalogApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpCatalogApi;
pub use mock::MockCatalogApi;
pub use query::{CategoriesQuery, CategoriesState, ProductsQuery, ProductsState};

// Re-export shared types for convenience
pub use shared::catalog::{PriceRange, ProductFilter, ProductPage, SortKey};
pub use shared::models::{Category, Price, Product, ProductCreate, ProductUpdate};
