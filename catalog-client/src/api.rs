//! Catalog API abstraction

use async_trait::async_trait;
use shared::catalog::{ProductFilter, ProductPage};
use shared::models::{Category, Product, ProductCreate, ProductUpdate};

use crate::ClientResult;

/// Operations the storefront needs from the catalog backend
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn fetch_products(&self, filter: &ProductFilter) -> ClientResult<ProductPage>;

    async fn fetch_product(&self, id: u64) -> ClientResult<Product>;

    async fn create_product(&self, data: &ProductCreate) -> ClientResult<Product>;

    async fn update_product(&self, id: u64, data: &ProductUpdate) -> ClientResult<Product>;

    /// Returns the removed record
    async fn delete_product(&self, id: u64) -> ClientResult<Product>;

    async fn fetch_categories(&self) -> ClientResult<Vec<Category>>;

    async fn fetch_category(&self, id: &str) -> ClientResult<Category>;
}

