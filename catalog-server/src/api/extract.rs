//! Extractors that reject with the standard error body
//!
//! axum's own rejections answer in plain text; these wrap `Path`, `Query`
//! and `Json` so every 4xx carries an `ApiResponse`.

use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Path, Query, Request,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use shared::error::{AppError, ErrorCode};

/// Path parameters
pub struct ApiPath<T>(pub T);

/// Query string; unknown fields are rejected when `T` denies them
pub struct ApiQuery<T>(pub T);

/// JSON request body
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(value)| ApiPath(value))
            .map_err(path_error)
    }
}

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| ApiQuery(value))
            .map_err(query_error)
    }
}

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| ApiJson(value))
            .map_err(json_error)
    }
}

fn path_error(rejection: PathRejection) -> AppError {
    AppError::invalid_request(rejection.body_text())
}

fn query_error(rejection: QueryRejection) -> AppError {
    AppError::validation(rejection.body_text())
}

fn json_error(rejection: JsonRejection) -> AppError {
    let text = rejection.body_text();
    match rejection {
        JsonRejection::JsonDataError(_) => AppError::validation(text),
        _ => AppError::with_message(ErrorCode::InvalidFormat, text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct Flag {
        featured: bool,
    }

    async fn extract(body: &str) -> Result<ApiJson<Flag>, AppError> {
        let req = http::Request::builder()
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        ApiJson::<Flag>::from_request(req, &()).await
    }

    #[tokio::test]
    async fn data_errors_are_validation_even_when_mentioning_price() {
        let err = extract(r#"{"featured":"price"}"#).await.err().unwrap();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn syntax_errors_are_invalid_format() {
        let err = extract("{not json").await.err().unwrap();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }
}
