//! tourdesk server entry point

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use tourdesk_core::config::ConfigLoader;
use tourdesk_core::logging::init_logging;
use tourdesk_core::session::run_sweeper;
use tourdesk_data::DataStore;
use tourdesk_server::{run_server, AppState};

#[derive(Parser)]
#[command(name = "tourdesk")]
#[command(about = "Vacation-package booking chat service")]
#[command(version)]
struct Cli {
    /// Configuration directory (defaults to ~/.tourdesk)
    #[arg(short, long)]
    config_dir: Option<PathBuf>,

    /// Override the configured bind port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let loader = match cli.config_dir {
        Some(dir) => ConfigLoader::with_dir(dir),
        None => ConfigLoader::new(),
    };
    let mut config = loader.load().context("failed to load configuration")?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let _guard = init_logging(&config.logging);
    info!("Starting tourdesk (config dir {})", loader.config_dir().display());

    if config.azure.endpoint.trim().is_empty() || config.azure.api_key.trim().is_empty() {
        anyhow::bail!(
            "Azure OpenAI is not configured: set AZURE_ENDPOINT and AZURE_API_KEY \
             (or azure.endpoint / azure.api_key in config.json)"
        );
    }

    // A missing or malformed dataset is fatal; there is nothing to sell
    // without it.
    let store = Arc::new(
        DataStore::load(Path::new(&config.data.dir)).context("failed to load datasets")?,
    );
    if !config.data.package_id.is_empty()
        && config.data.package_id != store.package().package_id
    {
        warn!(
            "Configured package id {} does not match dataset package {}",
            config.data.package_id,
            store.package().package_id
        );
    }

    let state = AppState::build(&config, store);
    let sweeper = run_sweeper(
        state.cache.clone(),
        Duration::from_secs(config.cache.sweep_interval_secs),
    );

    let result = run_server(state, &config.server).await;
    sweeper.abort();
    result
}
