//! Shared application state

use std::sync::Arc;

use crate::cache::{Clock, SystemClock};
use crate::core::Config;
use crate::db::{CategoryRepository, MemoryStore, ProductStore};
use crate::services::CatalogService;

/// State handed to every handler. Cheap to clone.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub catalog: CatalogService,
}

impl ServerState {
    /// Seeded in-memory catalog on the system clock
    pub fn new(config: Config) -> Self {
        Self::with_store(config, Arc::new(MemoryStore::seeded()), Arc::new(SystemClock))
    }

    /// State over an explicit product backend and clock
    pub fn with_store(config: Config, store: Arc<dyn ProductStore>, clock: Arc<dyn Clock>) -> Self {
        let catalog = CatalogService::new(
            store,
            CategoryRepository::seeded(),
            config.cache_settings(),
            clock,
        );
        Self { config, catalog }
    }
}
