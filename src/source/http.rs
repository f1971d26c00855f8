//! Remote catalog over HTTP.

use std::time::Duration;

use crate::catalog::{Product, ProductsResponse};
use crate::config::schema::TimeoutConfig;
use crate::source::{ProductSource, SourceError};

/// Issues one GET per attempt against the catalog endpoint.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    /// Create a source for `url` with the transport timeouts applied.
    pub fn new(url: &str, timeouts: &TimeoutConfig) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .timeout(Duration::from_secs(timeouts.request_secs))
            .user_agent(concat!("catalog-fetch/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SourceError::Invalid(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    /// Use a preconfigured client, e.g. one with proxies disabled.
    pub fn with_client(url: &str, client: reqwest::Client) -> Self {
        Self {
            client,
            url: url.to_string(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ProductSource for HttpSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, SourceError> {
        let response = self.client.get(&self.url).send().await.map_err(|e| {
            if e.is_builder() {
                SourceError::Invalid(e.to_string())
            } else {
                SourceError::NoResponse(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url = %self.url, status = %status, "Catalog request returned non-success status");
            return Err(SourceError::Status(status.as_u16()));
        }

        // A body cut off mid-transfer is a transport failure and gets retried.
        let bytes = response
            .bytes()
            .await
            .map_err(|e| SourceError::NoResponse(format!("Catalog body not received: {}", e)))?;

        let body: ProductsResponse = serde_json::from_slice(&bytes)
            .map_err(|e| SourceError::Invalid(format!("Invalid catalog payload: {}", e)))?;

        Ok(body.into_products())
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
