//! Backoff delay calculation.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Total attempts made by a default fetch.
pub const MAX_RETRIES: u32 = 3;

/// Base delay between attempts.
pub const RETRY_DELAY: Duration = Duration::from_millis(500);

/// Default cap on a single delay.
pub const MAX_RETRY_DELAY: Duration = Duration::from_secs(10);

/// How the delay grows with the number of failed attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackoffStrategy {
    /// `base * n` after the n-th failure.
    #[default]
    Linear,
    /// `base * 2^(n-1)` after the n-th failure.
    Exponential,
}

/// Retry bounds and delay shape for one fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
    pub strategy: BackoffStrategy,
    /// Add 0-10% random jitter to each delay.
    pub jitter: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_RETRIES,
            base_delay: RETRY_DELAY,
            max_delay: MAX_RETRY_DELAY,
            strategy: BackoffStrategy::Linear,
            jitter: false,
        }
    }
}

impl RetryPolicy {
    /// Delay to wait after `failures` failed attempts, before the next one.
    pub fn delay_after(&self, failures: u32) -> Duration {
        calculate_backoff(
            self.strategy,
            failures,
            self.base_delay,
            self.max_delay,
            self.jitter,
        )
    }
}

/// Calculate the backoff delay after `failures` failed attempts.
///
/// Zero failures means no delay. The result never exceeds `max` before jitter.
pub fn calculate_backoff(
    strategy: BackoffStrategy,
    failures: u32,
    base: Duration,
    max: Duration,
    jitter: bool,
) -> Duration {
    if failures == 0 {
        return Duration::ZERO;
    }

    let base_ms = base.as_millis() as u64;
    let delay_ms = match strategy {
        BackoffStrategy::Linear => base_ms.saturating_mul(failures as u64),
        BackoffStrategy::Exponential => {
            base_ms.saturating_mul(2u64.saturating_pow(failures - 1))
        }
    };
    let capped_delay = delay_ms.min(max.as_millis() as u64);

    // Apply jitter (0 to 10% of the delay)
    let jitter_range = capped_delay / 10;
    let jitter_ms = if jitter && jitter_range > 0 {
        rand::thread_rng().gen_range(0..jitter_range)
    } else {
        0
    };

    Duration::from_millis(capped_delay + jitter_ms)
}
