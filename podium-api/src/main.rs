//! Podium API - Main entry point
//!
//! CRUD REST service over the debate archive plus the proxy endpoint
//! delegating text analysis to the external AI service.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use podium_api::services::HttpAnalyzeService;
use podium_api::{build_router, AppState};
use podium_common::config::{Config, ConfigOverrides, TomlConfig};

/// Command-line arguments for podium-api
#[derive(Parser, Debug)]
#[command(name = "podium-api")]
#[command(about = "Debate archive REST API")]
#[command(version)]
struct Args {
    /// Database connection string (e.g. sqlite://podium.db?mode=rwc)
    #[arg(long, env = "PODIUM_DATABASE_URL")]
    database_url: Option<String>,

    /// Base URL of the external AI analysis service
    #[arg(long, env = "PODIUM_AI_BASE_URL")]
    ai_base_url: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PODIUM_PORT")]
    port: Option<u16>,

    /// Path to a TOML config file
    #[arg(short, long, env = "PODIUM_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "podium_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Podium API v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let file = match &args.config {
        Some(path) => Some(TomlConfig::load(path).context("Failed to load config file")?),
        None => None,
    };

    // Missing database connection string is fatal here
    let config = Config::resolve(
        ConfigOverrides {
            database_url: args.database_url,
            ai_base_url: args.ai_base_url,
            port: args.port,
        },
        file,
    )?;

    let pool = podium_common::db::init_database(&config.database_url)
        .await
        .context("Failed to initialize database")?;

    let analyze = HttpAnalyzeService::new(&config.ai_base_url)
        .context("Failed to create analysis client")?;

    let state = AppState::new(pool, Arc::new(analyze));
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Podium API listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
