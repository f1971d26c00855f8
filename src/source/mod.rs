//! Product sources.
//!
//! # Data Flow
//! ```text
//! FetchConfig.source.mode
//!     → remote: http.rs (GET catalog URL via reqwest)
//!     → local:  local.rs (read bundled products.json)
//!     → CatalogSource (one type the fetcher is generic over)
//! ```
//!
//! A source makes exactly one attempt per call and reports what happened;
//! retrying and classification belong to the fetcher.

pub mod http;
pub mod local;

use std::future::Future;
use thiserror::Error;

use crate::catalog::Product;
use crate::config::schema::{FetchConfig, SourceMode};

pub use http::HttpSource;
pub use local::LocalSource;

/// Outcome of a single failed attempt, as seen by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The request went out but nothing came back.
    #[error("no response received: {0}")]
    NoResponse(String),

    /// A response arrived with a non-2xx status.
    #[error("Unexpected response status: {0}")]
    Status(u16),

    /// The payload could not be read or decoded, or the request could not be built.
    #[error("{0}")]
    Invalid(String),
}

/// Anything that can produce the raw product list.
pub trait ProductSource: Send + Sync {
    /// Make one attempt at loading the catalog.
    fn fetch_products(&self) -> impl Future<Output = Result<Vec<Product>, SourceError>> + Send;

    /// Short label for logs, e.g. the URL or file path.
    fn describe(&self) -> String;
}

/// The configured source: remote in production, the bundled file locally.
#[derive(Debug, Clone)]
pub enum CatalogSource {
    Remote(HttpSource),
    Local(LocalSource),
}

impl CatalogSource {
    /// Build the source selected by `config.source.mode`.
    pub fn from_config(config: &FetchConfig) -> Result<Self, SourceError> {
        let source = match config.source.mode {
            SourceMode::Remote => {
                CatalogSource::Remote(HttpSource::new(&config.source.url, &config.timeouts)?)
            }
            SourceMode::Local => CatalogSource::Local(LocalSource::new(&config.source.path)),
        };
        tracing::debug!(source = %source.describe(), "Product source configured");
        Ok(source)
    }
}

impl ProductSource for CatalogSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, SourceError> {
        match self {
            CatalogSource::Remote(source) => source.fetch_products().await,
            CatalogSource::Local(source) => source.fetch_products().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            CatalogSource::Remote(source) => source.describe(),
            CatalogSource::Local(source) => source.describe(),
        }
    }
}
