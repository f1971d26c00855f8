//! Configuration management.
//!
//! # Data Flow
//! ```text
//! config file (TOML) or defaults
//!     → loader.rs (parse, CATALOG_MODE override, caller overrides such as CLI flags)
//!     → validation.rs (semantic checks)
//!     → FetchConfig (validated, immutable)
//! ```

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{default_config, load_config, load_config_with, mode_from_env, ConfigError};
pub use schema::{
    FetchConfig, LogFormat, ObservabilityConfig, RetryConfig, SourceConfig, SourceMode,
    TimeoutConfig,
};
pub use validation::{validate_config, ValidationError};
