//! Resilient catalog fetch.
//!
//! # Responsibilities
//! - Ask the source for products, one attempt at a time
//! - Classify each failure and retry transient ones after a backoff delay
//! - Fold every outcome into a `FetchResult`; nothing escapes as an error

use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

use crate::fetch::FetchResult;
use crate::observability::metrics;
use crate::resilience::backoff::RetryPolicy;
use crate::resilience::retries::{classify, is_retryable};
use crate::source::ProductSource;

/// Fetches the catalog from a source, retrying transient failures.
///
/// Holds no mutable state, so one fetcher can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct ResilientFetcher<S> {
    source: S,
    policy: RetryPolicy,
}

impl<S: ProductSource> ResilientFetcher<S> {
    /// Fetcher with the default policy (3 attempts, 500ms linear backoff).
    pub fn new(source: S) -> Self {
        Self::with_policy(source, RetryPolicy::default())
    }

    pub fn with_policy(source: S, policy: RetryPolicy) -> Self {
        Self { source, policy }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Load the catalog.
    ///
    /// Returns products on the first success. A 4xx or any unclassified
    /// failure ends the fetch at once; network and 5xx failures are retried
    /// until the policy's attempts are used up, and the last error is kept.
    pub async fn fetch(&self) -> FetchResult {
        let span = tracing::info_span!(
            "catalog_fetch",
            fetch_id = %Uuid::new_v4(),
            source = %self.source.describe()
        );
        self.run().instrument(span).await
    }

    async fn run(&self) -> FetchResult {
        let start = Instant::now();
        let max_attempts = self.policy.max_attempts.max(1);
        let mut attempts = 0;

        loop {
            attempts += 1;
            tracing::debug!(attempt = attempts, max_attempts, "Requesting products");

            let error = match self.source.fetch_products().await {
                Ok(products) => {
                    metrics::record_attempt(None);
                    metrics::record_result("success", attempts, start);
                    tracing::info!(attempt = attempts, count = products.len(), "Products fetched");
                    return FetchResult::success(products);
                }
                Err(e) => classify(e),
            };
            metrics::record_attempt(Some(error.kind()));

            if !is_retryable(&error) {
                tracing::warn!(
                    attempt = attempts,
                    kind = error.kind().as_str(),
                    status = ?error.status(),
                    detail = ?error.detail(),
                    "Fetch failed, not retrying"
                );
                metrics::record_result("permanent", attempts, start);
                return FetchResult::failure(error);
            }

            if attempts >= max_attempts {
                tracing::warn!(
                    attempts,
                    kind = error.kind().as_str(),
                    status = ?error.status(),
                    detail = ?error.detail(),
                    "Fetch failed, retries exhausted"
                );
                metrics::record_result("exhausted", attempts, start);
                return FetchResult::failure(error);
            }

            let delay = self.policy.delay_after(attempts);
            tracing::info!(
                attempt = attempts,
                delay = ?delay,
                kind = error.kind().as_str(),
                status = ?error.status(),
                "Retrying after transient failure"
            );
            tokio::time::sleep(delay).await;
        }
    }
}
