//! Resilient product-catalog fetching for the storefront service layer.

pub mod catalog;
pub mod config;
pub mod fetch;
pub mod observability;
pub mod resilience;
pub mod source;

pub use catalog::Product;
pub use config::schema::FetchConfig;
pub use fetch::{FetchError, FetchResult, ResilientFetcher};
pub use source::{CatalogSource, ProductSource};
