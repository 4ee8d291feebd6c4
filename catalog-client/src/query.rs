//! Query hooks
//!
//! Each query keeps a small response cache and publishes its state through a
//! `tokio::sync::watch` channel, so any number of views can subscribe.
//!
//! - Fresh cached responses (younger than the stale time) are served without
//!   calling the API.
//! - Stale responses stay visible while a reload is in flight.
//! - Cached product pages unused for the gc time are dropped, except the one
//!   for the current filter.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use shared::catalog::{ProductFilter, ProductPage};
use shared::models::{Category, Product};
use tokio::sync::watch;
use tokio::time::Instant;

use crate::CatalogApi;

pub const PRODUCTS_STALE_TIME: Duration = Duration::from_secs(5 * 60);
pub const PRODUCTS_GC_TIME: Duration = Duration::from_secs(10 * 60);
pub const CATEGORIES_STALE_TIME: Duration = Duration::from_secs(24 * 60 * 60);

/// What a product listing view renders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductsState {
    pub products: Vec<Product>,
    pub total_products: usize,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl ProductsState {
    fn from_page(page: &ProductPage) -> Self {
        Self {
            products: page.products.clone(),
            total_products: page.total,
            is_loading: false,
            error: None,
        }
    }
}

struct CachedPage {
    page: ProductPage,
    fetched_at: Instant,
    last_used: Instant,
}

struct Current {
    filter: ProductFilter,
    key: String,
}

/// Product listing query memoized on the filter's cache key
pub struct ProductsQuery<A: ?Sized> {
    api: Arc<A>,
    current: Mutex<Current>,
    cache: Mutex<HashMap<String, CachedPage>>,
    state: watch::Sender<ProductsState>,
    stale_time: Duration,
    gc_time: Duration,
}

impl<A: CatalogApi + ?Sized> ProductsQuery<A> {
    pub fn new(api: Arc<A>, filter: ProductFilter) -> Self {
        let key = filter.cache_key();
        let (state, _) = watch::channel(ProductsState::default());
        Self {
            api,
            current: Mutex::new(Current { filter, key }),
            cache: Mutex::new(HashMap::new()),
            state,
            stale_time: PRODUCTS_STALE_TIME,
            gc_time: PRODUCTS_GC_TIME,
        }
    }

    pub fn with_times(mut self, stale_time: Duration, gc_time: Duration) -> Self {
        self.stale_time = stale_time;
        self.gc_time = gc_time;
        self
    }

    pub fn subscribe(&self) -> watch::Receiver<ProductsState> {
        self.state.subscribe()
    }

    /// Latest published state
    pub fn state(&self) -> ProductsState {
        self.state.borrow().clone()
    }

    pub fn filter(&self) -> ProductFilter {
        self.current.lock().filter.clone()
    }

    /// Number of cached product pages
    pub fn cached_queries(&self) -> usize {
        self.cache.lock().len()
    }

    /// Switch to `filter` and fetch it. Returns `false` without doing anything
    /// when the filter selects the same key as the current one.
    pub async fn set_filter(&self, filter: ProductFilter) -> bool {
        let key = filter.cache_key();
        {
            let mut current = self.current.lock();
            if current.key == key {
                return false;
            }
            *current = Current { filter, key };
        }
        self.fetch().await;
        true
    }

    /// Serve the current filter from cache while fresh, otherwise load it
    pub async fn fetch(&self) -> ProductsState {
        let (filter, key) = self.snapshot();
        let now = Instant::now();
        self.collect_garbage_at(now, &key);

        let fresh = {
            let mut cache = self.cache.lock();
            cache.get_mut(&key).and_then(|entry| {
                entry.last_used = now;
                (now.duration_since(entry.fetched_at) < self.stale_time)
                    .then(|| ProductsState::from_page(&entry.page))
            })
        };

        match fresh {
            Some(state) => {
                tracing::debug!(key = %key, "products served from cache");
                self.publish_if_current(&key, state.clone());
                state
            }
            None => self.load(filter, key).await,
        }
    }

    /// Always call the API for the current filter
    pub async fn refetch(&self) -> ProductsState {
        let (filter, key) = self.snapshot();
        self.load(filter, key).await
    }

    /// Drop cached pages unused for longer than the gc time
    pub fn collect_garbage(&self) {
        let key = self.current.lock().key.clone();
        self.collect_garbage_at(Instant::now(), &key);
    }

    fn snapshot(&self) -> (ProductFilter, String) {
        let current = self.current.lock();
        (current.filter.clone(), current.key.clone())
    }

    async fn load(&self, filter: ProductFilter, key: String) -> ProductsState {
        let previous = self
            .cache
            .lock()
            .get(&key)
            .map(|entry| ProductsState::from_page(&entry.page))
            .unwrap_or_default();

        self.publish_if_current(
            &key,
            ProductsState {
                is_loading: true,
                ..previous.clone()
            },
        );

        let state = match self.api.fetch_products(&filter).await {
            Ok(page) => {
                let state = ProductsState::from_page(&page);
                let now = Instant::now();
                self.cache.lock().insert(
                    key.clone(),
                    CachedPage {
                        page,
                        fetched_at: now,
                        last_used: now,
                    },
                );
                state
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load products");
                ProductsState {
                    error: Some(e.to_string()),
                    ..previous
                }
            }
        };

        self.publish_if_current(&key, state.clone());
        state
    }

    // A response for a filter the caller has already moved away from is
    // cached but not shown.
    fn publish_if_current(&self, key: &str, state: ProductsState) {
        if self.current.lock().key == key {
            self.state.send_replace(state);
        }
    }

    fn collect_garbage_at(&self, now: Instant, active: &str) {
        let gc_time = self.gc_time;
        self.cache
            .lock()
            .retain(|key, entry| key == active || now.duration_since(entry.last_used) < gc_time);
    }
}

/// What a category view renders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoriesState {
    pub categories: Vec<Category>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Category list query; categories rarely change, so the stale time is long
pub struct CategoriesQuery<A: ?Sized> {
    api: Arc<A>,
    cache: Mutex<Option<(Vec<Category>, Instant)>>,
    state: watch::Sender<CategoriesState>,
    stale_time: Duration,
}

impl<A: CatalogApi + ?Sized> CategoriesQuery<A> {
    pub fn new(api: Arc<A>) -> Self {
        let (state, _) = watch::channel(CategoriesState::default());
        Self {
            api,
            cache: Mutex::new(None),
            state,
            stale_time: CATEGORIES_STALE_TIME,
        }
    }

    pub fn with_stale_time(mut self, stale_time: Duration) -> Self {
        self.stale_time = stale_time;
        self
    }

    pub fn subscribe(&self) -> watch::Receiver<CategoriesState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> CategoriesState {
        self.state.borrow().clone()
    }

    pub async fn fetch(&self) -> CategoriesState {
        let now = Instant::now();
        let fresh = self
            .cache
            .lock()
            .as_ref()
            .filter(|(_, fetched_at)| now.duration_since(*fetched_at) < self.stale_time)
            .map(|(categories, _)| CategoriesState {
                categories: categories.clone(),
                ..Default::default()
            });

        match fresh {
            Some(state) => {
                self.state.send_replace(state.clone());
                state
            }
            None => self.refetch().await,
        }
    }

    pub async fn refetch(&self) -> CategoriesState {
        let previous = self
            .cache
            .lock()
            .as_ref()
            .map(|(categories, _)| categories.clone())
            .unwrap_or_default();

        self.state.send_replace(CategoriesState {
            categories: previous.clone(),
            is_loading: true,
            error: None,
        });

        let state = match self.api.fetch_categories().await {
            Ok(categories) => {
                *self.cache.lock() = Some((categories.clone(), Instant::now()));
                CategoriesState {
                    categories,
                    ..Default::default()
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load categories");
                CategoriesState {
                    categories: previous,
                    is_loading: false,
                    error: Some(e.to_string()),
                }
            }
        };

        self.state.send_replace(state.clone());
        state
    }
}
