//! Configuration validation.
//!
//! Serde handles syntax; this module checks value ranges and that the
//! selected source mode has what it needs. All problems are reported,
//! not just the first.

use thiserror::Error;

use crate::config::schema::{FetchConfig, SourceMode};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("source.url '{url}' is invalid: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("source.path must not be empty in local mode")]
    EmptyPath,

    #[error("retries.max_attempts must be at least 1")]
    NoAttempts,

    #[error("retries.max_delay_ms ({max}) is below retries.base_delay_ms ({base})")]
    DelayCapBelowBase { base: u64, max: u64 },

    #[error("timeouts.{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &FetchConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match config.source.mode {
        SourceMode::Remote => {
            if let Err(reason) = check_url(&config.source.url) {
                errors.push(ValidationError::InvalidUrl {
                    url: config.source.url.clone(),
                    reason,
                });
            }
        }
        SourceMode::Local => {
            if config.source.path.trim().is_empty() {
                errors.push(ValidationError::EmptyPath);
            }
        }
    }

    let retries = &config.retries;
    if retries.max_attempts == 0 {
        errors.push(ValidationError::NoAttempts);
    }
    if retries.max_delay_ms < retries.base_delay_ms {
        errors.push(ValidationError::DelayCapBelowBase {
            base: retries.base_delay_ms,
            max: retries.max_delay_ms,
        });
    }

    if config.timeouts.connect_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("connect_secs"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("request_secs"));
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_url(raw: &str) -> Result<(), String> {
    let parsed = url::Url::parse(raw).map_err(|e| e.to_string())?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!("unsupported scheme '{}'", other)),
    }
}
