//! Category Repository
//!
//! Categories are seeded once and never change at runtime.

use std::sync::Arc;

use shared::models::Category;

use super::{RepoError, RepoResult};

#[derive(Debug, Clone)]
pub struct CategoryRepository {
    categories: Arc<[Category]>,
}

impl CategoryRepository {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories: categories.into(),
        }
    }

    pub fn seeded() -> Self {
        Self::new(shared::catalog::seed::categories())
    }

    pub fn find_all(&self) -> Vec<Category> {
        self.categories.to_vec()
    }

    pub fn find_by_id(&self, id: &str) -> RepoResult<Category> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| RepoError::CategoryNotFound(id.to_string()))
    }
}
