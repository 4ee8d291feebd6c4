//! Product Repository

use std::sync::Arc;

use shared::models::{Product, ProductCreate, ProductUpdate};

use super::{RepoError, RepoResult};
use crate::db::ProductStore;

#[derive(Clone)]
pub struct ProductRepository {
    store: Arc<dyn ProductStore>,
}

impl ProductRepository {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Product>> {
        self.store.all().await
    }

    pub async fn find_by_id(&self, id: u64) -> RepoResult<Product> {
        self.store
            .get(id)
            .await?
            .ok_or(RepoError::ProductNotFound(id))
    }

    /// Assign the next id (max + 1, or 1 for an empty store) and append
    pub async fn create(&self, data: ProductCreate) -> RepoResult<Product> {
        let product = self.store.insert(data).await?;
        tracing::info!(id = product.id, title = %product.title, "Product created");
        Ok(product)
    }

    /// Shallow merge of `data` into the stored product
    pub async fn update(&self, id: u64, data: ProductUpdate) -> RepoResult<Product> {
        let product = self
            .store
            .replace(id, data)
            .await?
            .ok_or(RepoError::ProductNotFound(id))?;
        tracing::info!(id, "Product updated");
        Ok(product)
    }

    /// Remove and return the product
    pub async fn delete(&self, id: u64) -> RepoResult<Product> {
        let product = self
            .store
            .remove(id)
            .await?
            .ok_or(RepoError::ProductNotFound(id))?;
        tracing::info!(id, "Product deleted");
        Ok(product)
    }
}
