//! Repository Module
//!
//! CRUD over the product store and read access to the static category list.

pub mod category;
pub mod product;

pub use category::CategoryRepository;
pub use product::ProductRepository;

use shared::error::AppError;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Product {0} not found")]
    ProductNotFound(u64),

    #[error("Category {0} not found")]
    CategoryNotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::ProductNotFound(id) => AppError::product_not_found(id),
            RepoError::CategoryNotFound(id) => AppError::category_not_found(&id),
            RepoError::Storage(msg) => AppError::internal(msg),
        }
    }
}
