//! Catalog fetch with retries.
//!
//! # Data Flow
//! ```text
//! ResilientFetcher::fetch()
//!     → ProductSource::fetch_products() (one attempt)
//!     → resilience::classify (Network | Server | Client | Unknown)
//!     → transient and attempts left: sleep, try again
//!     → FetchResult { data | error }
//! ```

pub mod fetcher;
pub mod result;

pub use fetcher::ResilientFetcher;
pub use result::{ErrorKind, FetchError, FetchResult};
