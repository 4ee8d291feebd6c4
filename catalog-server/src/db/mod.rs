//! Storage layer
//!
//! - [`store`] - product storage backends ([`ProductStore`], [`MemoryStore`])
//! - [`repository`] - repositories over the backends

pub mod repository;
pub mod store;

pub use repository::{CategoryRepository, ProductRepository, RepoError, RepoResult};
pub use store::{MemoryStore, ProductStore};
