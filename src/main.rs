//! catalog-fetch
//!
//! Loads the storefront product catalog once, retrying transient failures,
//! and prints the result as JSON:
//!
//! ```text
//! {"data": [...] | null, "error": "..." | null, "error_kind": ..., "loading": false}
//! ```
//!
//! Exits with status 1 when the fetch ends in an error.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use catalog_fetch::catalog::filter_by_sizes;
use catalog_fetch::config::{self, SourceMode};
use catalog_fetch::observability::init_logging;
use catalog_fetch::{CatalogSource, FetchResult, ResilientFetcher};

#[derive(Parser)]
#[command(name = "catalog-fetch")]
#[command(about = "Fetch the storefront product catalog with retries", long_about = None)]
struct Cli {
    /// TOML configuration file; defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Product source (remote, local, or production).
    #[arg(short, long)]
    mode: Option<SourceMode>,

    /// Catalog URL for remote mode.
    #[arg(short, long)]
    url: Option<String>,

    /// Catalog file for local mode.
    #[arg(short, long)]
    path: Option<String>,

    /// Only keep products available in this size (repeatable).
    #[arg(short, long = "size")]
    sizes: Vec<String>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = config::load_config_with(cli.config.as_deref(), |config| {
        if let Some(mode) = cli.mode {
            config.source.mode = mode;
        }
        if let Some(url) = cli.url.clone() {
            config.source.url = url;
        }
        if let Some(path) = cli.path.clone() {
            config.source.path = path;
        }
    })?;

    init_logging(&config.observability);
    if let Some(mode) = config::mode_from_env()? {
        tracing::debug!(
            mode = ?mode,
            superseded_by_flag = cli.mode.is_some(),
            "Source mode overridden from environment"
        );
    }
    tracing::info!(
        mode = ?config.source.mode,
        max_attempts = config.retries.max_attempts,
        base_delay_ms = config.retries.base_delay_ms,
        strategy = ?config.retries.strategy,
        "Configuration loaded"
    );

    let source = CatalogSource::from_config(&config)?;
    let fetcher = ResilientFetcher::with_policy(source, config.retries.to_policy());
    let mut result = fetcher.fetch().await;

    if !cli.sizes.is_empty() {
        if let Some(products) = result.data() {
            let filtered = filter_by_sizes(products, &cli.sizes);
            tracing::debug!(sizes = ?cli.sizes, kept = filtered.len(), "Applied size filter");
            result = FetchResult::success(filtered);
        }
    }

    let output = if cli.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", output);

    Ok(if result.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
