//! Storefront catalog payloads and helpers.

pub mod filter;
pub mod types;

pub use filter::filter_by_sizes;
pub use types::{Product, ProductsResponse};
