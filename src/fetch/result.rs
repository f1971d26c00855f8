//! Fetch outcome and error taxonomy.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::catalog::Product;

const UNKNOWN_ERROR: &str = "An unknown error occurred.";

/// Coarse failure category, for callers that branch on the kind only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Network,
    Server,
    Client,
    Unknown,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Network => "network",
            ErrorKind::Server => "server",
            ErrorKind::Client => "client",
            ErrorKind::Unknown => "unknown",
        }
    }
}

/// Why a fetch failed.
///
/// `Display` gives the user-facing message. The optional `detail` keeps the
/// underlying transport text for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// No response was received.
    #[error("Network error: Please check your internet connection.")]
    Network { detail: Option<String> },

    /// The server answered with a 5xx status.
    #[error("Server error: Please try again later.")]
    Server { status: u16, detail: Option<String> },

    /// The server answered with a 4xx status.
    #[error("Request error: Unable to fetch products.")]
    Client { status: u16, detail: Option<String> },

    /// Anything else; the message is shown as is.
    #[error("{}", unknown_message(.detail.as_deref()))]
    Unknown { detail: Option<String> },
}

fn unknown_message(detail: Option<&str>) -> &str {
    detail.unwrap_or(UNKNOWN_ERROR)
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::Network { .. } => ErrorKind::Network,
            FetchError::Server { .. } => ErrorKind::Server,
            FetchError::Client { .. } => ErrorKind::Client,
            FetchError::Unknown { .. } => ErrorKind::Unknown,
        }
    }

    /// HTTP status, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Server { status, .. } | FetchError::Client { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            FetchError::Network { detail }
            | FetchError::Server { detail, .. }
            | FetchError::Client { detail, .. }
            | FetchError::Unknown { detail } => detail.as_deref(),
        }
    }

    /// Network and server failures may clear up on their own.
    pub fn is_transient(&self) -> bool {
        matches!(self.kind(), ErrorKind::Network | ErrorKind::Server)
    }
}

/// Outcome of one fetch: either products or an error, never both.
///
/// Serializes as `{"data", "error", "error_kind", "loading"}` with the error
/// rendered as its message.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResult {
    data: Option<Vec<Product>>,
    error: Option<FetchError>,
    loading: bool,
}

impl FetchResult {
    pub fn success(products: Vec<Product>) -> Self {
        Self {
            data: Some(products),
            error: None,
            loading: false,
        }
    }

    pub fn failure(error: FetchError) -> Self {
        Self {
            data: None,
            error: Some(error),
            loading: false,
        }
    }

    pub fn data(&self) -> Option<&[Product]> {
        self.data.as_deref()
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    /// Always false once a result exists.
    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn is_success(&self) -> bool {
        self.data.is_some()
    }

    /// Products on success, an empty list on failure.
    pub fn products_or_empty(self) -> Vec<Product> {
        self.data.unwrap_or_default()
    }

    pub fn into_result(self) -> Result<Vec<Product>, FetchError> {
        match (self.data, self.error) {
            (Some(products), _) => Ok(products),
            (None, Some(error)) => Err(error),
            (None, None) => Err(FetchError::Unknown { detail: None }),
        }
    }
}

impl Serialize for FetchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FetchResult", 4)?;
        state.serialize_field("data", &self.data)?;
        state.serialize_field("error", &self.error.as_ref().map(ToString::to_string))?;
        state.serialize_field("error_kind", &self.error.as_ref().map(FetchError::kind))?;
        state.serialize_field("loading", &self.loading)?;
        state.end()
    }
}
