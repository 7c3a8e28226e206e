//! CLI command definitions and handlers

use clap::Subcommand;
use std::sync::Arc;

use crate::core::config::ServiceConfig;
use crate::core::engine::{InferenceApiEngine, TranslationEngine};
use crate::core::languages::SUPPORTED_LANGUAGES;
use crate::core::models::{Segmentation, TranslationRequest};
use crate::core::translator::LineTranslator;

/// Commands for the M2M100 translation service
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP API server
    Serve {
        /// Bind address (default: T_HOST or 0.0.0.0)
        #[arg(long)]
        host: Option<String>,

        /// Listen port (default: T_PORT or 5001)
        #[arg(short, long)]
        port: Option<u16>,

        /// Enable debug mode
        #[arg(long)]
        debug: bool,
    },

    /// Translate text once and print the response as JSON
    Translate {
        /// Text to translate
        text: String,

        /// Source language code
        #[arg(long, default_value = "en")]
        from_lang: String,

        /// Target language code
        #[arg(short, long)]
        to: String,

        /// Override segmentation mode (full-text or per-line)
        #[arg(long)]
        segmentation: Option<Segmentation>,
    },

    /// List supported language codes
    Languages,
}

/// Handle server command
pub async fn handle_serve(host: Option<String>, port: Option<u16>, debug: bool) -> anyhow::Result<()> {
    use crate::server::api::run_server;
    use tracing::{debug, info};

    let mut config = ServiceConfig::load()?;
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    config.validate()?;

    if debug {
        debug!("Debug mode enabled: {:?}", config);
    }

    info!(
        "Starting HTTP server on http://{} (OpenAPI document at /openapi.json)",
        config.bind_address()
    );

    run_server(config).await?;

    Ok(())
}

/// Handle one-shot translate command
pub async fn handle_translate(
    text: String,
    from_lang: String,
    to: String,
    segmentation: Option<Segmentation>,
) -> anyhow::Result<()> {
    use tracing::info;

    let mut config = ServiceConfig::load()?;
    if let Some(segmentation) = segmentation {
        config.segmentation = segmentation;
    }

    info!("Translating {} -> {} with {}", from_lang, to, config.model);

    let engine: Arc<dyn TranslationEngine> = Arc::new(InferenceApiEngine::from_config(&config)?);
    let translator = LineTranslator::from_config(engine, &config);

    let request = TranslationRequest::new(text, from_lang, to);
    let response = translator.translate(&request).await?;

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

/// Handle languages command
pub fn handle_languages() -> anyhow::Result<()> {
    for language in SUPPORTED_LANGUAGES {
        println!("{:<4} {}", language.code, language.name);
    }
    println!("\n{} languages supported", SUPPORTED_LANGUAGES.len());

    Ok(())
}
