//! Fetch metrics.
//!
//! # Metrics
//! - `catalog_fetch_attempts_total` (counter): attempts by outcome
//!   (`success`, `network`, `server`, `client`, `unknown`)
//! - `catalog_fetch_results_total` (counter): completed fetches by result
//!   (`success`, `exhausted`, `permanent`)
//! - `catalog_fetch_duration_seconds` (histogram): wall time of a whole fetch,
//!   backoff included
//! - `catalog_fetch_attempts` (histogram): attempts used per fetch
//!
//! Without an installed recorder these calls are no-ops.

use std::time::Instant;

use crate::fetch::ErrorKind;

/// Record one attempt; `None` means it succeeded.
pub fn record_attempt(failure: Option<ErrorKind>) {
    let outcome = failure.map_or("success", |kind| kind.as_str());
    metrics::counter!("catalog_fetch_attempts_total", "outcome" => outcome).increment(1);
}

/// Record a finished fetch.
pub fn record_result(result: &'static str, attempts: u32, start: Instant) {
    metrics::counter!("catalog_fetch_results_total", "result" => result).increment(1);
    metrics::histogram!("catalog_fetch_duration_seconds", "result" => result)
        .record(start.elapsed().as_secs_f64());
    metrics::histogram!("catalog_fetch_attempts", "result" => result).record(attempts as f64);
}
