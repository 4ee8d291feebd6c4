//! In-process [`CatalogApi`] over the seed catalog
//!
//! Runs the same filter engine as the server and simulates network latency.
//! Writes answer as if they succeeded but never persist.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use shared::catalog::{self, ProductFilter, ProductPage, seed};
use shared::models::{Category, Product, ProductCreate, ProductUpdate};
use tokio::time::sleep;

use crate::{CatalogApi, ClientError, ClientResult};

pub const PRODUCTS_LATENCY: Duration = Duration::from_millis(500);
pub const CATEGORIES_LATENCY: Duration = Duration::from_millis(300);

pub struct MockCatalogApi {
    products: Vec<Product>,
    categories: Vec<Category>,
    products_latency: Duration,
    categories_latency: Duration,
    /// Consulted by `fetch_product` for ids missing locally
    fallback: Option<Arc<dyn CatalogApi>>,
}

impl MockCatalogApi {
    /// Seed catalog with the default simulated latency
    pub fn new() -> Self {
        Self::with_data(seed::products(), seed::categories())
    }

    pub fn with_data(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
            products_latency: PRODUCTS_LATENCY,
            categories_latency: CATEGORIES_LATENCY,
            fallback: None,
        }
    }

    pub fn with_latency(mut self, products: Duration, categories: Duration) -> Self {
        self.products_latency = products;
        self.categories_latency = categories;
        self
    }

    pub fn with_fallback(mut self, api: Arc<dyn CatalogApi>) -> Self {
        self.fallback = Some(api);
        self
    }

    fn find(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    fn not_found(id: u64) -> ClientError {
        ClientError::NotFound(format!("Product {id} not found"))
    }
}

impl Default for MockCatalogApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogApi for MockCatalogApi {
    async fn fetch_products(&self, filter: &ProductFilter) -> ClientResult<ProductPage> {
        let page = catalog::apply(&self.products, filter);
        sleep(self.products_latency).await;
        Ok(page)
    }

    async fn fetch_product(&self, id: u64) -> ClientResult<Product> {
        sleep(self.products_latency).await;
        if let Some(product) = self.find(id) {
            return Ok(product.clone());
        }
        match &self.fallback {
            Some(api) => api.fetch_product(id).await,
            None => Err(Self::not_found(id)),
        }
    }

    async fn create_product(&self, data: &ProductCreate) -> ClientResult<Product> {
        sleep(self.products_latency).await;
        let next_id = self.products.iter().map(|p| p.id).max().map_or(1, |max| max + 1);
        Ok(Product::from_create(next_id, data.clone()))
    }

    async fn update_product(&self, id: u64, data: &ProductUpdate) -> ClientResult<Product> {
        sleep(self.products_latency).await;
        let mut product = self.find(id).cloned().ok_or_else(|| Self::not_found(id))?;
        product.apply_update(data.clone());
        Ok(product)
    }

    async fn delete_product(&self, id: u64) -> ClientResult<Product> {
        sleep(self.products_latency).await;
        self.find(id).cloned().ok_or_else(|| Self::not_found(id))
    }

    async fn fetch_categories(&self) -> ClientResult<Vec<Category>> {
        sleep(self.categories_latency).await;
        Ok(self.categories.clone())
    }

    async fn fetch_category(&self, id: &str) -> ClientResult<Category> {
        sleep(self.categories_latency).await;
        self.categories
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("Category {id} not found")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::catalog::SortKey;
    use shared::models::Price;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn simulates_latency() {
        let api = MockCatalogApi::new();

        let start = Instant::now();
        let page = api.fetch_products(&ProductFilter::new()).await.unwrap();
        assert!(start.elapsed() >= PRODUCTS_LATENCY);
        assert_eq!(page.total, 16);

        let start = Instant::now();
        let categories = api.fetch_categories().await.unwrap();
        assert!(start.elapsed() >= CATEGORIES_LATENCY);
        assert!(start.elapsed() < PRODUCTS_LATENCY);
        assert_eq!(categories.len(), 5);

        let start = Instant::now();
        let product = api.fetch_product(9).await.unwrap();
        assert!(start.elapsed() >= PRODUCTS_LATENCY);
        assert_eq!(product.id, 9);
    }

    #[tokio::test(start_paused = true)]
    async fn filters_with_the_shared_engine() {
        let api = MockCatalogApi::new();
        let filter = ProductFilter::new()
            .with_category("security")
            .with_sort(SortKey::PriceHigh);
        let page = api.fetch_products(&filter).await.unwrap();
        let ids: Vec<u64> = page.products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![9, 10, 4, 11]);
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_product_uses_fallback_for_unknown_ids() {
        let remote = MockCatalogApi::with_data(
            vec![Product::from_create(
                99,
                ProductCreate {
                    title: "Remote Only".into(),
                    description: "served by the fallback".into(),
                    price: Price::new(1),
                    category: "solutions".into(),
                    ..Default::default()
                },
            )],
            Vec::new(),
        );
        let api = MockCatalogApi::new().with_fallback(Arc::new(remote));

        assert_eq!(api.fetch_product(1).await.unwrap().title, "Enterprise Servers");
        assert_eq!(api.fetch_product(99).await.unwrap().title, "Remote Only");
        assert!(matches!(
            api.fetch_product(100).await,
            Err(ClientError::NotFound(_))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn writes_do_not_persist() {
        let api = MockCatalogApi::new();

        let created = api
            .create_product(&ProductCreate {
                title: "Edge Router".into(),
                description: "Branch office router".into(),
                price: Price::new(18_500),
                category: "networking".into(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(created.id, 17);

        let updated = api
            .update_product(
                1,
                &ProductUpdate {
                    featured: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(!updated.featured);

        api.delete_product(2).await.unwrap();

        let all = api.fetch_products(&ProductFilter::new()).await.unwrap();
        assert_eq!(all.total, 16);
        assert!(api.fetch_product(1).await.unwrap().featured);
    }
}
