//! Vigil: a standalone health probe server.
//!
//! This is the application entry point. It initializes tracing, loads
//! configuration from a TOML file (or built-in defaults), sets up the Axum
//! router and starts the HTTP server.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vigil::config::{AppConfig, LogFormat, DEFAULT_LOG_FILTER};
use vigil::create_router;
use vigil::http::start_server;

/// Vigil: a liveness and readiness probe endpoint
#[derive(Parser, Debug)]
#[command(name = "vigil", version, about)]
struct Args {
    /// Path to configuration file (default: config/default.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level filter (e.g., "vigil=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Config first: it decides the log format
    let (config, source) = AppConfig::load_or_default(args.config.as_deref())?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry = tracing_subscriber::registry().with(EnvFilter::new(&log_filter));
    match config.logging.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    match &source {
        Some(path) => tracing::info!(
            config = %path.display(),
            output = config.build.output.as_str(),
            "Loaded configuration"
        ),
        None => tracing::info!(
            output = config.build.output.as_str(),
            "No configuration file found, using built-in defaults"
        ),
    }

    let app = create_router();
    start_server(app, &config).await?;

    tracing::info!("Server stopped");
    Ok(())
}
