// web_app/api/http.rs - reqwest implementation of ProductApi
//
// Maps the five product routes plus the health probe onto HTTP calls.
// On WASM reqwest goes through the browser's fetch.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use super::{ApiError, ProductApi};
use crate::web_app::config::ClientConfig;
use crate::web_app::model::{ApiHealth, Product, ProductPayload};

/// HTTP client for the product backend
#[derive(Clone, Debug)]
pub struct HttpProductApi {
    client: Client,
    base_url: String,
}

impl HttpProductApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn product_url(&self, id: i64) -> String {
        self.url(&format!("/products/{}", id))
    }

    /// Send the request and return the response if its status is 2xx
    async fn send(
        request: RequestBuilder,
        method: &'static str,
        url: &str,
    ) -> Result<reqwest::Response, ApiError> {
        let response = request.send().await.map_err(|e| ApiError::Transport {
            method,
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                method,
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        debug!(status = %status, "{} {}", method, url);
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(
        request: RequestBuilder,
        method: &'static str,
        url: &str,
    ) -> Result<T, ApiError> {
        Self::send(request, method, url)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Decode {
                method,
                url: url.to_string(),
                message: e.to_string(),
            })
    }
}

#[async_trait(?Send)]
impl ProductApi for HttpProductApi {
    #[instrument(skip(self))]
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let url = self.url("/products");
        Self::send_json(self.client.get(&url), "GET", &url).await
    }

    #[instrument(skip(self))]
    async fn get_product(&self, id: i64) -> Result<Product, ApiError> {
        let url = self.product_url(id);
        Self::send_json(self.client.get(&url), "GET", &url).await
    }

    #[instrument(skip(self, payload), fields(name = %payload.name))]
    async fn create_product(&self, payload: &ProductPayload) -> Result<Product, ApiError> {
        let url = self.url("/products");
        let request = self.client.request(Method::POST, &url).json(payload);
        Self::send_json(request, "POST", &url).await
    }

    #[instrument(skip(self, payload), fields(name = %payload.name))]
    async fn update_product(&self, id: i64, payload: &ProductPayload) -> Result<Product, ApiError> {
        let url = self.product_url(id);
        let request = self.client.request(Method::PUT, &url).json(payload);
        Self::send_json(request, "PUT", &url).await
    }

    #[instrument(skip(self))]
    async fn delete_product(&self, id: i64) -> Result<(), ApiError> {
        let url = self.product_url(id);
        Self::send(self.client.delete(&url), "DELETE", &url).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn health(&self) -> Result<ApiHealth, ApiError> {
        let url = self.url("/health");
        Self::send_json(self.client.get(&url), "GET", &url).await
    }
}
