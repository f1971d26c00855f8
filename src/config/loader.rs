//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::{FetchConfig, SourceMode};
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable selecting the source mode (`production`, `remote`, `local`).
pub const MODE_ENV_VAR: &str = "CATALOG_MODE";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid CATALOG_MODE: {0}")]
    Env(String),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration from a TOML file, apply the environment override and validate.
pub fn load_config(path: &Path) -> Result<FetchConfig, ConfigError> {
    load_config_with(Some(path), |_| {})
}

/// Defaults plus the environment override, validated.
pub fn default_config() -> Result<FetchConfig, ConfigError> {
    load_config_with(None, |_| {})
}

/// Load from `path` (or defaults), apply the environment override, then
/// `overrides` (e.g. command-line flags), and validate the result.
pub fn load_config_with<F>(path: Option<&Path>, overrides: F) -> Result<FetchConfig, ConfigError>
where
    F: FnOnce(&mut FetchConfig),
{
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => FetchConfig::default(),
    };

    if let Some(mode) = mode_from_env()? {
        config.source.mode = mode;
    }
    overrides(&mut config);

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Source mode requested through `CATALOG_MODE`, if any.
///
/// Loading runs before logging is installed, so callers that want to report
/// the override do it themselves once the subscriber is up.
pub fn mode_from_env() -> Result<Option<SourceMode>, ConfigError> {
    let raw = std::env::var(MODE_ENV_VAR).ok();
    parse_mode_override(raw.as_deref())
}

/// Parse an override value; blank counts as absent.
pub fn parse_mode_override(mode: Option<&str>) -> Result<Option<SourceMode>, ConfigError> {
    match mode.filter(|m| !m.trim().is_empty()) {
        Some(raw) => raw.parse::<SourceMode>().map(Some).map_err(ConfigError::Env),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "catalog-fetch-{}-{}.toml",
            name,
            uuid::Uuid::new_v4()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_mode_override() {
        assert_eq!(parse_mode_override(Some("production")).unwrap(), Some(SourceMode::Remote));
        assert_eq!(parse_mode_override(Some(" local ")).unwrap(), Some(SourceMode::Local));
        assert_eq!(parse_mode_override(None).unwrap(), None);
        assert_eq!(parse_mode_override(Some("  ")).unwrap(), None);

        let err = parse_mode_override(Some("qa")).unwrap_err();
        assert!(err.to_string().contains("unknown source mode 'qa'"));
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let path = write_temp(
            "invalid",
            r#"
            [retries]
            max_attempts = 0
            "#,
        );
        let result = load_config(&path);
        let _ = fs::remove_file(&path);

        match result {
            Err(ConfigError::Validation(errors)) => {
                assert!(errors.contains(&ValidationError::NoAttempts));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let path = write_temp("broken", "[retries\nmax_attempts = ");
        let result = load_config(&path);
        let _ = fs::remove_file(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_overrides_apply_before_validation() {
        let path = write_temp(
            "override",
            r#"
            [source]
            mode = "remote"
            url = "not a url"
            "#,
        );
        let result = load_config_with(Some(&path), |config| {
            config.source.url = "http://127.0.0.1:8080/products.json".to_string();
        });
        let _ = fs::remove_file(&path);

        let config = result.unwrap();
        assert_eq!(config.source.url, "http://127.0.0.1:8080/products.json");
    }

    #[test]
    fn test_missing_file() {
        let result = load_config(Path::new("/nonexistent/catalog-fetch.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
