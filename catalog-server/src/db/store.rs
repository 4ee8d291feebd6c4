//! Product storage backends
//!
//! Every mutating method runs as one critical section, so id assignment and
//! read-modify-write updates never interleave with other writers.

use async_trait::async_trait;
use parking_lot::RwLock;
use shared::models::{Product, ProductCreate, ProductUpdate};

use super::RepoResult;

/// Backend holding the product collection
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Snapshot of every product in dataset order
    async fn all(&self) -> RepoResult<Vec<Product>>;

    async fn get(&self, id: u64) -> RepoResult<Option<Product>>;

    /// Append a new product under the next free id
    async fn insert(&self, data: ProductCreate) -> RepoResult<Product>;

    /// Merge `data` into the stored product; `None` when the id is unknown
    async fn replace(&self, id: u64, data: ProductUpdate) -> RepoResult<Option<Product>>;

    /// Remove and return the product; `None` when the id is unknown
    async fn remove(&self, id: u64) -> RepoResult<Option<Product>>;
}

/// In-memory backend. Contents live as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    products: RwLock<Vec<Product>>,
}

impl MemoryStore {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }

    /// Store preloaded with the seed catalog
    pub fn seeded() -> Self {
        Self::new(shared::catalog::seed::products())
    }

    fn next_id_of(products: &[Product]) -> u64 {
        products.iter().map(|p| p.id).max().map_or(1, |max| max + 1)
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn all(&self) -> RepoResult<Vec<Product>> {
        Ok(self.products.read().clone())
    }

    async fn get(&self, id: u64) -> RepoResult<Option<Product>> {
        Ok(self.products.read().iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, data: ProductCreate) -> RepoResult<Product> {
        let mut products = self.products.write();
        let product = Product::from_create(Self::next_id_of(&products), data);
        products.push(product.clone());
        Ok(product)
    }

    async fn replace(&self, id: u64, data: ProductUpdate) -> RepoResult<Option<Product>> {
        let mut products = self.products.write();
        let Some(product) = products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        product.apply_update(data);
        Ok(Some(product.clone()))
    }

    async fn remove(&self, id: u64) -> RepoResult<Option<Product>> {
        let mut products = self.products.write();
        let Some(index) = products.iter().position(|p| p.id == id) else {
            return Ok(None);
        };
        Ok(Some(products.remove(index)))
    }
}
