//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Fetch attempt fails:
//!     → retries.rs (classify: transient or permanent)
//!     → transient with attempts left: backoff.rs (delay before next attempt)
//!     → otherwise the last error is returned to the caller
//! ```
//!
//! # Design Decisions
//! - Attempts are strictly sequential
//! - Linear backoff by default, exponential on request
//! - No retry after a 4xx or an undecodable payload

pub mod backoff;
pub mod retries;

pub use backoff::{calculate_backoff, BackoffStrategy, RetryPolicy, MAX_RETRIES, RETRY_DELAY};
pub use retries::{classify, is_retryable};
