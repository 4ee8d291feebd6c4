//! Category API Handlers

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::api::extract::ApiPath;
use crate::core::ServerState;
use shared::error::AppResult;
use shared::models::Category;

/// GET /api/categories - bare list
pub async fn list(State(state): State<ServerState>) -> Json<Arc<Vec<Category>>> {
    Json(state.catalog.list_categories())
}

/// GET /api/categories/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<String>,
) -> AppResult<Json<Category>> {
    let category = state.catalog.get_category(&id)?;
    Ok(Json(category))
}
