//! Bundled catalog read from disk.

use std::path::{Path, PathBuf};

use crate::catalog::{Product, ProductsResponse};
use crate::source::{ProductSource, SourceError};

/// Reads the catalog JSON file on every attempt.
#[derive(Debug, Clone)]
pub struct LocalSource {
    path: PathBuf,
}

impl LocalSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ProductSource for LocalSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, SourceError> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            SourceError::Invalid(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        let body: ProductsResponse = serde_json::from_str(&content).map_err(|e| {
            SourceError::Invalid(format!("Invalid catalog file {}: {}", self.path.display(), e))
        })?;

        Ok(body.into_products())
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}
