//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! fetcher
//!     → logging.rs (structured events inside a per-fetch span)
//!     → metrics.rs (attempt and result counters, duration histogram)
//! ```

pub mod logging;
pub mod metrics;

pub use logging::init_logging;
