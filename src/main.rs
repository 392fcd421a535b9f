//! Main entry point for the Azbox keyword CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use azbox_client::cli::commands::{self, Commands, ConfigArgs};

/// Azbox keyword CLI - fetch project translations
#[derive(Parser, Debug)]
#[command(name = "azbox-keywords", version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    config: ConfigArgs,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging; logs go to stderr so stdout stays valid JSON
    let log_level = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("azbox_client={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = args.config.into_config();

    match args.command {
        Commands::Fetch {
            after,
            output,
            pretty,
        } => {
            commands::handle_fetch(config, after, output, pretty).await?;
        }
        Commands::Export { after, output } => {
            commands::handle_export(config, after, output).await?;
        }
    }

    Ok(())
}
