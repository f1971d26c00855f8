//! Product payload types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One catalog entry as served by the storefront backend.
///
/// The entry is kept exactly as received. Nulls, string ids and fields this
/// crate has never heard of all pass through; the accessors only read.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Product(Value);

impl Product {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The entry as received.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Numeric or string identifier, whichever the backend sent.
    pub fn id(&self) -> Option<&Value> {
        self.field("id")
    }

    pub fn title(&self) -> Option<&str> {
        self.field("title").and_then(Value::as_str)
    }

    /// Sizes on offer. Non-string entries are skipped.
    pub fn available_sizes(&self) -> impl Iterator<Item = &str> {
        self.field("availableSizes")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
    }

    fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name).filter(|v| !v.is_null())
    }
}

impl From<Value> for Product {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Wire envelope: `{"data": {"products": [...]}}`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ProductsResponse {
    pub data: ProductsData,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ProductsData {
    pub products: Option<Vec<Product>>,
}

impl ProductsResponse {
    /// A missing or null product list counts as empty.
    pub fn into_products(self) -> Vec<Product> {
        self.data.products.unwrap_or_default()
    }
}
