//! genesis - command-line companion for AI Genesis
//!
//! This CLI gives developers a terminal view of the site core:
//! - Send contact messages to a running `genesisd`
//! - Replay scroll positions through the scroll spy
//! - Look up translations and render the control hub
//! - Run the workshop bug simulation

use clap::{Parser, Subcommand};
use colored::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod client;
mod commands;
mod error;
mod output;

use commands::{contact, hub, i18n, nav, workshop, Context};
use error::CliResult;
use genesis_site::{Locale, TranslationCatalog};
use output::{print_error, print_single, OutputFormat};

/// Genesis CLI application
#[derive(Parser)]
#[command(name = "genesis")]
#[command(about = "AI Genesis - site core and contact service CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Genesis daemon endpoint
    #[arg(short, long, env = "GENESIS_ENDPOINT", default_value = "http://localhost:8080")]
    endpoint: String,

    /// Interface language (pl, en, ja)
    #[arg(short, long, env = "GENESIS_LANG", default_value = "pl")]
    lang: Locale,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table")]
    output: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Contact form
    Contact {
        #[command(subcommand)]
        command: contact::ContactCommands,
    },

    /// Section navigation and scroll spy
    Nav {
        #[command(subcommand)]
        command: nav::NavCommands,
    },

    /// Render the control hub
    Hub(hub::HubArgs),

    /// Translations
    I18n {
        #[command(subcommand)]
        command: i18n::I18nCommands,
    },

    /// Workshop bug simulation
    Workshop {
        #[command(subcommand)]
        command: workshop::WorkshopCommands,
    },

    /// Check daemon connectivity
    Status,
}

#[tokio::main]
async fn main() -> CliResult<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let ctx = Context {
        locale: cli.lang,
        format: cli.output,
        translations: TranslationCatalog::bundled()?,
    };
    let client = client::GenesisClient::new(&cli.endpoint)?;

    match cli.command {
        Commands::Contact { command } => contact::execute(command, &client, &ctx).await,
        Commands::Nav { command } => nav::execute(command, &ctx),
        Commands::Hub(args) => hub::execute(args, &ctx),
        Commands::I18n { command } => i18n::execute(command, &ctx),
        Commands::Workshop { command } => workshop::execute(command, &ctx),
        Commands::Status => match client.health_check().await {
            Ok(status) if ctx.format == OutputFormat::Json => print_single(&status),
            Ok(status) => {
                println!("{} genesis daemon is {}", "✓".green(), status.status);
                println!("  Endpoint: {}", client.base_url());
                println!("  Version: {}", status.version);
                println!("  Uptime: {}", status.uptime);
                Ok(())
            }
            Err(e) => {
                print_error(&format!("Cannot connect to genesis daemon: {}", e));
                std::process::exit(1);
            }
        },
    }
}
