// web_app/config.rs - Client configuration
//
// The only setting the client needs is the base URL of the product API.
// The server reads it from the environment and publishes it to the browser
// through a <meta> tag so the hydrated client talks to the same backend.

use std::env;

use thiserror::Error;

/// Backend used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable holding the backend base URL
pub const API_URL_ENV: &str = "PRODUCT_API_URL";

/// Name of the <meta> tag carrying the base URL into the page
pub const API_URL_META: &str = "product-api-url";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid product API URL '{url}': {details}")]
    InvalidApiUrl { url: String, details: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without trailing slash, e.g. `http://localhost:8000`
    pub api_url: String,
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = api_url.into();
        let trimmed = raw.trim().trim_end_matches('/');

        let parsed = reqwest::Url::parse(trimmed).map_err(|e| ConfigError::InvalidApiUrl {
            url: raw.clone(),
            details: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidApiUrl {
                url: raw.clone(),
                details: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(Self {
            api_url: trimmed.to_string(),
        })
    }

    /// Read `PRODUCT_API_URL`, falling back to [`DEFAULT_API_URL`]
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(api_url)
    }

    /// Read the base URL published by the server in the page head
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Option<Self> {
        let selector = format!("meta[name=\"{}\"]", API_URL_META);
        let meta = leptos::prelude::document()
            .query_selector(&selector)
            .ok()
            .flatten()?;
        let content = meta.get_attribute("content")?;

        match Self::new(content) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!("Ignoring published API URL: {}", e);
                None
            }
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}
