//! Product API Handlers

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::api::extract::{ApiPath, ApiQuery};
use crate::core::ServerState;
use shared::catalog::ProductPage;
use shared::error::AppResult;
use shared::models::{Product, ProductCreate, ProductUpdate};

use super::{ListQuery, ProductJson};

/// GET /api/products - filtered, sorted listing
pub async fn list(
    State(state): State<ServerState>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> AppResult<Json<Arc<ProductPage>>> {
    let filter = query.into_filter()?;
    let page = state.catalog.list_products(&filter).await?;
    Ok(Json(page))
}

/// GET /api/products/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<u64>,
) -> AppResult<Json<Product>> {
    let product = state.catalog.get_product(id).await?;
    Ok(Json(product))
}

/// POST /api/products
pub async fn create(
    State(state): State<ServerState>,
    ProductJson(payload): ProductJson<ProductCreate>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = state.catalog.create_product(payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/products/{id} - shallow merge
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<u64>,
    ProductJson(payload): ProductJson<ProductUpdate>,
) -> AppResult<Json<Product>> {
    let product = state.catalog.update_product(id, payload).await?;
    Ok(Json(product))
}

/// DELETE /api/products/{id} - returns the removed record
pub async fn delete(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<u64>,
) -> AppResult<Json<Product>> {
    let product = state.catalog.delete_product(id).await?;
    Ok(Json(product))
}
