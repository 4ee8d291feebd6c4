//! Catalog Service
//!
//! Composes the repositories with the query caches. Product listings are
//! cached per normalized filter; the category list is cached as a whole.
//! Every product write invalidates the product cache and leaves the category
//! cache alone.

use std::sync::Arc;
use std::time::Duration;

use shared::catalog::{self, ProductFilter, ProductPage};
use shared::models::{Category, Product, ProductCreate, ProductUpdate};

use crate::cache::{Clock, QueryCache, TtlCell};
use crate::db::{CategoryRepository, ProductRepository, ProductStore, RepoResult};

/// Cache sizing for [`CatalogService`]
#[derive(Debug, Clone, Copy)]
pub struct CacheSettings {
    pub product_ttl: Duration,
    pub product_capacity: usize,
    pub category_ttl: Duration,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            product_ttl: Duration::from_secs(5 * 60),
            product_capacity: 64,
            category_ttl: Duration::from_secs(24 * 60 * 60),
        }
    }
}

#[derive(Clone)]
pub struct CatalogService {
    products: ProductRepository,
    categories: CategoryRepository,
    product_cache: Arc<QueryCache<ProductPage>>,
    category_cache: Arc<TtlCell<Vec<Category>>>,
}

impl CatalogService {
    pub fn new(
        store: Arc<dyn ProductStore>,
        categories: CategoryRepository,
        settings: CacheSettings,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            products: ProductRepository::new(store),
            categories,
            product_cache: Arc::new(QueryCache::new(
                settings.product_ttl,
                settings.product_capacity,
                Arc::clone(&clock),
            )),
            category_cache: Arc::new(TtlCell::new(settings.category_ttl, clock)),
        }
    }

    /// Filtered, sorted listing; served from cache while fresh
    pub async fn list_products(&self, filter: &ProductFilter) -> RepoResult<Arc<ProductPage>> {
        let key = filter.cache_key();
        if let Some(page) = self.product_cache.get(&key) {
            return Ok(page);
        }

        // A write landing while the snapshot is in flight bumps the generation,
        // and the page built from the old snapshot is returned but not cached.
        let generation = self.product_cache.generation();
        let products = self.products.find_all().await?;
        let page = catalog::apply(&products, filter);
        Ok(self
            .product_cache
            .insert_if_generation(key, generation, page))
    }

    pub async fn get_product(&self, id: u64) -> RepoResult<Product> {
        self.products.find_by_id(id).await
    }

    pub async fn create_product(&self, data: ProductCreate) -> RepoResult<Product> {
        let product = self.products.create(data).await?;
        self.product_cache.invalidate();
        Ok(product)
    }

    pub async fn update_product(&self, id: u64, data: ProductUpdate) -> RepoResult<Product> {
        let product = self.products.update(id, data).await?;
        self.product_cache.invalidate();
        Ok(product)
    }

    pub async fn delete_product(&self, id: u64) -> RepoResult<Product> {
        let product = self.products.delete(id).await?;
        self.product_cache.invalidate();
        Ok(product)
    }

    pub fn list_categories(&self) -> Arc<Vec<Category>> {
        self.category_cache
            .get_or_compute(|| self.categories.find_all())
    }

    pub fn get_category(&self, id: &str) -> RepoResult<Category> {
        self.categories.find_by_id(id)
    }
}

#[cfg(test)]
impl CatalogService {
    fn cached_listings(&self) -> usize {
        self.product_cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use crate::db::{MemoryStore, RepoError};
    use async_trait::async_trait;
    use shared::catalog::SortKey;
    use shared::models::Price;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::sync::Notify;

    /// Store whose next `all()` parks after taking its snapshot until released
    #[derive(Default)]
    struct PausingStore {
        inner: MemoryStore,
        pause_next: AtomicBool,
        snapshot_taken: Notify,
        release: Notify,
    }

    #[async_trait]
    impl ProductStore for PausingStore {
        async fn all(&self) -> RepoResult<Vec<Product>> {
            let snapshot = self.inner.all().await?;
            if self.pause_next.swap(false, Ordering::SeqCst) {
                self.snapshot_taken.notify_one();
                self.release.notified().await;
            }
            Ok(snapshot)
        }

        async fn get(&self, id: u64) -> RepoResult<Option<Product>> {
            self.inner.get(id).await
        }

        async fn insert(&self, data: ProductCreate) -> RepoResult<Product> {
            self.inner.insert(data).await
        }

        async fn replace(&self, id: u64, data: ProductUpdate) -> RepoResult<Option<Product>> {
            self.inner.replace(id, data).await
        }

        async fn remove(&self, id: u64) -> RepoResult<Option<Product>> {
            self.inner.remove(id).await
        }
    }

    fn edge_router() -> ProductCreate {
        ProductCreate {
            title: "Edge Router".into(),
            description: "Branch router".into(),
            price: Price::new(18_500),
            category: "networking".into(),
            ..Default::default()
        }
    }

    fn service(clock: &ManualClock) -> CatalogService {
        CatalogService::new(
            Arc::new(MemoryStore::seeded()),
            CategoryRepository::seeded(),
            CacheSettings::default(),
            Arc::new(clock.clone()),
        )
    }

    #[tokio::test]
    async fn identical_filters_share_a_cached_page() {
        let svc = service(&ManualClock::new());
        let a = svc
            .list_products(&ProductFilter::new().with_category("Security"))
            .await
            .unwrap();
        let b = svc
            .list_products(&ProductFilter::new().with_category("security"))
            .await
            .unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(svc.cached_listings(), 1);
    }

    #[tokio::test]
    async fn listing_recomputes_after_ttl() {
        let clock = ManualClock::new();
        let svc = service(&clock);
        let filter = ProductFilter::new().with_sort(SortKey::PriceLow);

        let first = svc.list_products(&filter).await.unwrap();
        clock.advance(Duration::from_secs(5 * 60));
        let second = svc.list_products(&filter).await.unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn writes_invalidate_products_but_not_categories() {
        let svc = service(&ManualClock::new());
        let filter = ProductFilter::new();

        let before = svc.list_products(&filter).await.unwrap();
        let categories = svc.list_categories();

        let created = svc.create_product(edge_router()).await.unwrap();

        let after = svc.list_products(&filter).await.unwrap();
        assert_eq!(after.total, before.total + 1);
        assert!(after.products.iter().any(|p| p.id == created.id));
        assert!(Arc::ptr_eq(&categories, &svc.list_categories()));
    }

    #[tokio::test]
    async fn update_and_delete_are_visible_in_next_listing() {
        let svc = service(&ManualClock::new());
        let filter = ProductFilter::new().with_search("switches");
        assert_eq!(svc.list_products(&filter).await.unwrap().total, 1);

        svc.update_product(
            2,
            ProductUpdate {
                title: Some("Core Fabric".into()),
                description: Some("Spine and leaf".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(svc.list_products(&filter).await.unwrap().total, 0);

        svc.delete_product(1).await.unwrap();
        let all = svc.list_products(&ProductFilter::new()).await.unwrap();
        assert_eq!(all.total, 15);
    }

    #[tokio::test]
    async fn failed_write_keeps_listing_cached() {
        let svc = service(&ManualClock::new());
        let filter = ProductFilter::new();
        let before = svc.list_products(&filter).await.unwrap();

        let err = svc.delete_product(404).await.unwrap_err();
        assert!(matches!(err, RepoError::ProductNotFound(404)));

        let after = svc.list_products(&filter).await.unwrap();
        assert!(Arc::ptr_eq(&before, &after));
    }

    #[tokio::test]
    async fn write_during_listing_is_not_hidden_by_cache() {
        let store = Arc::new(PausingStore {
            inner: MemoryStore::seeded(),
            ..Default::default()
        });
        store.pause_next.store(true, Ordering::SeqCst);
        let svc = CatalogService::new(
            store.clone(),
            CategoryRepository::seeded(),
            CacheSettings::default(),
            Arc::new(ManualClock::new()),
        );

        let listing = tokio::spawn({
            let svc = svc.clone();
            async move { svc.list_products(&ProductFilter::new()).await }
        });

        store.snapshot_taken.notified().await;
        let created = svc.create_product(edge_router()).await.unwrap();
        store.release.notify_one();

        // the in-flight listing answers from its own snapshot
        let in_flight = listing.await.unwrap().unwrap();
        assert_eq!(in_flight.total, 16);

        let next = svc.list_products(&ProductFilter::new()).await.unwrap();
        assert_eq!(next.total, 17);
        assert!(next.products.iter().any(|p| p.id == created.id));
    }

    #[test]
    fn category_lookup() {
        let svc = service(&ManualClock::new());
        assert_eq!(svc.list_categories().len(), 5);
        assert_eq!(svc.get_category("networking").unwrap().name, "Networking");
        assert!(svc.get_category("nope").is_err());
    }
}
