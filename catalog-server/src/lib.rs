//! Catalog Server - product catalog HTTP service
//!
//! # Module layout
//!
//! ```text
//! catalog-server/src/
//! ├── core/          # config, state, router assembly
//! ├── cache/         # TTL and LRU query caches
//! ├── db/            # product store and repositories
//! ├── services/      # catalog service (repositories + caches)
//! ├── api/           # HTTP routes and handlers
//! ├── middleware/    # request logging, panic catch-all
//! └── utils/         # logger
//! ```

pub mod api;
pub mod cache;
pub mod core;
pub mod db;
pub mod middleware;
pub mod services;
pub mod utils;

pub use core::{Config, Server, ServerState, build_app};
pub use services::CatalogService;
pub use utils::logger::init_logger;

