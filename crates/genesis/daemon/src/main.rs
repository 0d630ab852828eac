//! genesisd - AI Genesis backend daemon
//!
//! Serves the contact endpoint of the site:
//! - `POST /api/contact` validates and records submissions
//! - `GET /api/health` reports version and uptime

use clap::Parser;
use genesis_daemon::error::{DaemonError, DaemonResult};
use genesis_daemon::{DaemonConfig, Server};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Genesis daemon CLI
#[derive(Parser)]
#[command(name = "genesisd")]
#[command(about = "AI Genesis daemon - contact form backend", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "GENESIS_CONFIG")]
    config: Option<String>,

    /// Listen address (overrides the configuration file)
    #[arg(short, long, env = "GENESIS_LISTEN_ADDR")]
    listen: Option<String>,

    /// Simulated processing delay before acknowledging, in milliseconds
    #[arg(long, env = "GENESIS_ACK_DELAY_MS")]
    ack_delay_ms: Option<u64>,

    /// Log level
    #[arg(long, env = "GENESIS_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, env = "GENESIS_LOG_JSON")]
    json: bool,
}

#[tokio::main]
async fn main() -> DaemonResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = DaemonConfig::load(cli.config.as_deref())?;

    // Override with CLI args
    if let Some(listen) = &cli.listen {
        config.server.listen_addr = listen
            .parse()
            .map_err(|e| DaemonError::Config(format!("Invalid listen address: {}", e)))?;
    }
    if let Some(delay) = cli.ack_delay_ms {
        config.contact.ack_delay_ms = delay;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    config.logging.json |= cli.json;

    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.level.clone().into());

    if config.logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        listen = %config.server.listen_addr,
        ack_delay_ms = config.contact.ack_delay_ms,
        cors = config.server.enable_cors,
        "starting genesis daemon"
    );

    Server::new(config).run().await
}
