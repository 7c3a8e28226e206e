//! Main entry point for the M2M100 translation service

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use m2m_translate::cli::commands::{self, Commands};

/// HTTP translation service backed by the M2M100 multilingual model
#[derive(Parser, Debug)]
#[command(name = "m2m-translate", version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}={},tower_http={}", m2m_translate::NAME.replace('-', "_"), level, level)
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();
    let verbose = args.verbose || matches!(args.command, Some(Commands::Serve { debug: true, .. }));
    init_logging(verbose);

    match args.command {
        Some(Commands::Serve { host, port, debug }) => {
            commands::handle_serve(host, port, debug).await?;
        }
        Some(Commands::Translate {
            text,
            from_lang,
            to,
            segmentation,
        }) => {
            commands::handle_translate(text, from_lang, to, segmentation).await?;
        }
        Some(Commands::Languages) => {
            commands::handle_languages()?;
        }
        None => {
            commands::handle_serve(None, None, false).await?;
        }
    }

    Ok(())
}
