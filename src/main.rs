mod cli;
mod config;
mod fetcher;
mod model;
mod normalizer;
mod parser;
mod provider;
mod storage;
mod utils;

use clap::Parser;
use cli::{Cli, CliError};
use config::{load_config, ConfigError};
use fetcher::HttpFetcher;
use model::{FetchError, OutputError, ProviderError};
use provider::ProviderHandle;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use storage::JsonFileStorage;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "config.json";

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Cli(#[from] CliError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] FetchError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Output(#[from] OutputError),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr, stdout only carries the output path.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(path) => {
            println!("Outputted to: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Validates input, runs one provider operation and writes the result.
async fn run(cli: Cli) -> Result<PathBuf, AppError> {
    let request = cli.request()?;

    let config = match &cli.config {
        Some(path) => load_config(path, true)?,
        None => load_config(DEFAULT_CONFIG, false)?,
    };

    let fetcher = Arc::new(HttpFetcher::new(
        Duration::from_secs(config.timeout_seconds),
        config.user_agents.clone(),
    )?);
    let provider = ProviderHandle::new(cli.provider, &config, fetcher);
    info!(
        "Provider {} ready (score supported: {})",
        provider.kind(),
        provider.supports_score()
    );

    let output = provider.execute(&request).await?;

    let storage = JsonFileStorage::new(&config.output_dir);
    let saved = storage.save(&cli.out, &output)?;
    Ok(saved.path)
}
