//! WildFire Server
//!
//! Run with: cargo run
//!
//! Configuration is read from `--config`, or from the first of
//! `~/.config/wildfire/config.toml`, `/etc/wildfire/config.toml` and
//! `./config.toml`, then overridden by environment variables
//! (`WILDFIRE_*`, `FIREBASE_*`, `NASA_FIRMS_MAP_KEY`, ...). `RUST_LOG`
//! takes precedence over the configured log level.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wildfire::api::{serve, AppState};
use wildfire::config::{generate_default_config, Config, LoggingConfig};

#[derive(Parser)]
#[command(name = "wildfire")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Wildfire risk monitoring server")]
struct Cli {
    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Print a default config file and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Config::load_default(),
    };

    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    init_tracing(&config.logging);

    tracing::info!("Starting WildFire server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Static directory: {}", config.server.static_dir);

    if config.satellite.firms_map_key.is_none() {
        tracing::warn!("NASA_FIRMS_MAP_KEY not set, hotspots will be simulated");
    }
    if config.satellite.openweather_api_key.is_none() {
        tracing::warn!("OPENWEATHER_API_KEY not set, weather will be simulated");
    }
    match &config.model.url {
        Some(url) => tracing::info!("Risk model service: {}", url),
        None => tracing::warn!("No risk model configured (set MODEL_URL to enable predictions)"),
    }

    let server_config = config.server.clone();
    let state = AppState::new(config).context("building application state")?;

    serve(state, &server_config).await?;

    tracing::info!("WildFire server stopped");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.level.as_str().into());

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
