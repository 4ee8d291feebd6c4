//! HTTP implementation of [`CatalogApi`]

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use shared::catalog::{ProductFilter, ProductPage};
use shared::error::ApiResponse;
use shared::models::{Category, Product, ProductCreate, ProductUpdate};

use crate::{CatalogApi, ClientConfig, ClientError, ClientResult};

/// HTTP client for the catalog server. Failures are logged and returned;
/// nothing is retried.
#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    client: Client,
    base_url: String,
}

impl HttpCatalogApi {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> ClientResult<T> {
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Map non-2xx statuses to [`ClientError`], preferring the server's
    /// error message over the raw body
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            let message = serde_json::from_str::<ApiResponse>(&text)
                .map(|body| body.message)
                .unwrap_or(text);
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(message)),
                _ => Err(ClientError::Internal(message)),
            };
        }

        response.json().await.map_err(Into::into)
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn fetch_products(&self, filter: &ProductFilter) -> ClientResult<ProductPage> {
        let request = self
            .client
            .get(self.url("/api/products"))
            .query(&filter.to_query_pairs());
        Self::send(request)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Error fetching products"))
    }

    async fn fetch_product(&self, id: u64) -> ClientResult<Product> {
        let request = self.client.get(self.url(&format!("/api/products/{id}")));
        Self::send(request)
            .await
            .inspect_err(|e| tracing::error!(id, error = %e, "Error fetching product"))
    }

    async fn create_product(&self, data: &ProductCreate) -> ClientResult<Product> {
        let request = self.client.post(self.url("/api/products")).json(data);
        Self::send(request)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Error creating product"))
    }

    async fn update_product(&self, id: u64, data: &ProductUpdate) -> ClientResult<Product> {
        let request = self
            .client
            .put(self.url(&format!("/api/products/{id}")))
            .json(data);
        Self::send(request)
            .await
            .inspect_err(|e| tracing::error!(id, error = %e, "Error updating product"))
    }

    async fn delete_product(&self, id: u64) -> ClientResult<Product> {
        let request = self.client.delete(self.url(&format!("/api/products/{id}")));
        Self::send(request)
            .await
            .inspect_err(|e| tracing::error!(id, error = %e, "Error deleting product"))
    }

    async fn fetch_categories(&self) -> ClientResult<Vec<Category>> {
        let request = self.client.get(self.url("/api/categories"));
        Self::send(request)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Error fetching categories"))
    }

    async fn fetch_category(&self, id: &str) -> ClientResult<Category> {
        let request = self.client.get(self.url(&format!("/api/categories/{id}")));
        Self::send(request)
            .await
            .inspect_err(|e| tracing::error!(id, error = %e, "Error fetching category"))
    }
}
