//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files.
//! Every field has a default so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::resilience::backoff::{BackoffStrategy, RetryPolicy};

/// Catalog URL used by the production storefront.
pub const DEFAULT_CATALOG_URL: &str =
    "https://react-shopping-cart-67954.firebaseio.com/products.json";

/// Root configuration for the catalog fetcher.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct FetchConfig {
    /// Where products are read from.
    pub source: SourceConfig,

    /// Retry configuration.
    pub retries: RetryConfig,

    /// Transport timeouts for the remote source.
    pub timeouts: TimeoutConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Which product source to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    /// HTTP GET against `url`.
    Remote,
    /// Read the bundled JSON file at `path`.
    #[default]
    Local,
}

impl std::str::FromStr for SourceMode {
    type Err = String;

    /// Accepts the build-mode names as well (`production` means remote).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "remote" | "production" => Ok(SourceMode::Remote),
            "local" | "development" => Ok(SourceMode::Local),
            other => Err(format!("unknown source mode '{}'", other)),
        }
    }
}

/// Product source configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Remote or local.
    pub mode: SourceMode,

    /// Catalog endpoint for remote mode.
    pub url: String,

    /// JSON file for local mode.
    pub path: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            mode: SourceMode::Local,
            url: DEFAULT_CATALOG_URL.to_string(),
            path: "static/products.json".to_string(),
        }
    }
}

/// Retry configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Total number of attempts, including the first.
    pub max_attempts: u32,

    /// Base delay between attempts in milliseconds.
    pub base_delay_ms: u64,

    /// Upper bound for any single delay in milliseconds.
    pub max_delay_ms: u64,

    /// How the delay grows with the attempt count.
    pub strategy: BackoffStrategy,

    /// Add up to 10% random jitter to each delay.
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        let policy = RetryPolicy::default();
        Self {
            max_attempts: policy.max_attempts,
            base_delay_ms: policy.base_delay.as_millis() as u64,
            max_delay_ms: policy.max_delay.as_millis() as u64,
            strategy: policy.strategy,
            jitter: policy.jitter,
        }
    }
}

impl RetryConfig {
    /// Build the runtime retry policy.
    pub fn to_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            base_delay: Duration::from_millis(self.base_delay_ms),
            max_delay: Duration::from_millis(self.max_delay_ms),
            strategy: self.strategy,
            jitter: self.jitter,
        }
    }
}

/// Transport timeouts.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Connection establishment timeout in seconds.
    pub connect_secs: u64,

    /// Total time for one request/response in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 5,
            request_secs: 30,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Pretty for terminals, JSON for log shipping.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: FetchConfig = toml::from_str("").unwrap();
        assert_eq!(config.source.mode, SourceMode::Local);
        assert_eq!(config.retries.max_attempts, 3);
        assert_eq!(config.retries.base_delay_ms, 500);
        assert_eq!(config.retries.strategy, BackoffStrategy::Linear);
    }

    #[test]
    fn test_partial_sections() {
        let config: FetchConfig = toml::from_str(
            r#"
            [source]
            mode = "remote"

            [retries]
            strategy = "exponential"
            base_delay_ms = 100
            "#,
        )
        .unwrap();

        assert_eq!(config.source.mode, SourceMode::Remote);
        assert_eq!(config.source.url, DEFAULT_CATALOG_URL);
        let policy = config.retries.to_policy();
        assert_eq!(policy.base_delay, Duration::from_millis(100));
        assert_eq!(policy.strategy, BackoffStrategy::Exponential);
        assert_eq!(policy.max_attempts, 3);
    }

    #[test]
    fn test_example_file_is_valid() {
        let config: FetchConfig =
            toml::from_str(include_str!("../../config.example.toml")).unwrap();
        assert_eq!(config.source.mode, SourceMode::Remote);
        assert_eq!(config.retries.to_policy(), crate::resilience::RetryPolicy::default());
        assert!(crate::config::validate_config(&config).is_ok());
    }

    #[test]
    fn test_mode_from_build_names() {
        assert_eq!("production".parse::<SourceMode>(), Ok(SourceMode::Remote));
        assert_eq!("Local".parse::<SourceMode>(), Ok(SourceMode::Local));
        assert!("staging".parse::<SourceMode>().is_err());
    }
}
