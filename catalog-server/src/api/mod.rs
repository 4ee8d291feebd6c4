//! API routes
//!
//! - [`health`] - liveness probe
//! - [`products`] - product listing and CRUD
//! - [`categories`] - category listing

pub mod categories;
pub mod extract;
pub mod health;
pub mod products;

use axum::http::Uri;
use shared::error::{AppError, ErrorCode};

/// Unmatched routes answer with the standard error body
pub async fn fallback(uri: Uri) -> AppError {
    AppError::with_message(ErrorCode::NotFound, format!("Route {} not found", uri.path()))
}
