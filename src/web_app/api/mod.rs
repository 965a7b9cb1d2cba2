// web_app/api/mod.rs - Product API access
//
// The backend is an external service. Everything the client needs from it
// goes through the `ProductApi` trait so the request/response logic can be
// driven by the real HTTP client or by an in-memory fake.

pub mod http;

use std::rc::Rc;

use async_trait::async_trait;
use thiserror::Error;

use crate::web_app::model::{ApiHealth, Product, ProductPayload};

pub use http::HttpProductApi;

/// Failure of a single backend call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response
    #[error("{method} {url} failed: {message}")]
    Transport {
        method: &'static str,
        url: String,
        message: String,
    },

    /// Any non-2xx response; the body is not inspected
    #[error("{method} {url} returned HTTP {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },

    /// A 2xx response whose JSON body did not match
    #[error("{method} {url} returned an unreadable body: {message}")]
    Decode {
        method: &'static str,
        url: String,
        message: String,
    },
}

impl ApiError {
    /// HTTP status of the response, when there was one
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Operations exposed by the product backend
///
/// Futures are not required to be `Send`: in the browser they run on the
/// single UI thread.
#[async_trait(?Send)]
pub trait ProductApi {
    /// `GET /products`
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// `GET /products/{id}`
    async fn get_product(&self, id: i64) -> Result<Product, ApiError>;

    /// `POST /products`
    async fn create_product(&self, payload: &ProductPayload) -> Result<Product, ApiError>;

    /// `PUT /products/{id}`
    async fn update_product(&self, id: i64, payload: &ProductPayload) -> Result<Product, ApiError>;

    /// `DELETE /products/{id}`
    async fn delete_product(&self, id: i64) -> Result<(), ApiError>;

    /// `GET /health`
    async fn health(&self) -> Result<ApiHealth, ApiError>;
}

#[async_trait(?Send)]
impl<T: ProductApi + ?Sized> ProductApi for Rc<T> {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        (**self).list_products().await
    }

    async fn get_product(&self, id: i64) -> Result<Product, ApiError> {
        (**self).get_product(id).await
    }

    async fn create_product(&self, payload: &ProductPayload) -> Result<Product, ApiError> {
        (**self).create_product(payload).await
    }

    async fn update_product(&self, id: i64, payload: &ProductPayload) -> Result<Product, ApiError> {
        (**self).update_product(id, payload).await
    }

    async fn delete_product(&self, id: i64) -> Result<(), ApiError> {
        (**self).delete_product(id).await
    }

    async fn health(&self) -> Result<ApiHealth, ApiError> {
        (**self).health().await
    }
}
