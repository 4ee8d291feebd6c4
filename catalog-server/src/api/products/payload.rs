//! Product request bodies
//!
//! An unreadable `price` is reported as `ProductInvalidPrice`; every other
//! shape problem is a plain validation error.

use axum::extract::{FromRequest, Request};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::error::{AppError, ErrorCode};
use shared::models::Price;

use crate::api::extract::ApiJson;

/// JSON body for product create/update
pub struct ProductJson<T>(pub T);

impl<S, T> FromRequest<S> for ProductJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let ApiJson(body) = ApiJson::<Value>::from_request(req, state).await?;
        check_price(&body)?;
        serde_json::from_value(body)
            .map(ProductJson)
            .map_err(|e| AppError::validation(e.to_string()))
    }
}

// A null price is left to the payload type: absent on update, missing on create.
fn check_price(body: &Value) -> Result<(), AppError> {
    match body.get("price") {
        Some(price) if !price.is_null() => Price::deserialize(price).map(|_| ()).map_err(|e| {
            AppError::with_message(ErrorCode::ProductInvalidPrice, e.to_string())
                .with_detail("field", "price")
        }),
        _ => Ok(()),
    }
}
