//! Prep Bot
//!
//! Serves the document-QA chat page on a local port.
//!
//! Run with: cargo run -- --api-url http://localhost:8000
//!
//! # Configuration
//!
//! - `--config <path>`: TOML config file (default: searched, see `Config::load_default`)
//! - `--api-url <url>` / `PREPBOT_API_URL`: Backend base URL
//! - `RUST_LOG`: Log filter (default from `[logging] level`)

use anyhow::Context;
use clap::{Parser, Subcommand};
use prepbot::backend::BackendClient;
use prepbot::config::{generate_default_config, Config, Discovery, API_URL_ENV};
use prepbot::web::{serve, AppState};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "prepbot")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Chat with an assistant about your course documents")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL
    #[arg(long, env = API_URL_ENV, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the chat page (default)
    Serve,

    /// Print a commented default config file
    InitConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::InitConfig) = cli.command {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let discovery = match &cli.config {
        Some(path) => Discovery {
            config: Config::load_with_env(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            source: Some(path.clone()),
            skipped: Vec::new(),
        },
        None => Config::discover(),
    };

    init_tracing(&discovery.config);
    discovery.log();

    let mut config = discovery.config;
    if let Some(url) = cli.api_url {
        config.backend.base_url = url;
    }

    tracing::info!("Starting Prep Bot v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Backend: {}", config.backend.base_url);

    let backend = BackendClient::new(config.backend.client_config())
        .context("building backend client")?;

    let state = AppState::new(Arc::new(backend), config);
    state.mount();

    serve(state).await.context("serving page")?;

    tracing::info!("Prep Bot stopped");
    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.default_directive().into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
