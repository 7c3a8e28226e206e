//! Configuration management

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

use crate::core::models::Segmentation;

/// Prefix shared by every environment variable the service reads (`T_PORT`, `T_MODEL`, ...)
pub const ENV_PREFIX: &str = "T";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_MODEL: &str = "facebook/m2m100_418M";
pub const DEFAULT_ENGINE_URL: &str = "https://api-inference.huggingface.co/models";
pub const DEFAULT_MAX_LENGTH: usize = 512;
pub const DEFAULT_TIMEOUT_MS: u64 = 120_000;

/// Service configuration
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    /// Model id reported in responses and requested from the inference API
    pub model: String,
    pub engine_url: String,
    pub api_token: Option<String>,
    pub max_length: usize,
    pub timeout_ms: u64,
    pub segmentation: Segmentation,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            model: DEFAULT_MODEL.to_string(),
            engine_url: DEFAULT_ENGINE_URL.to_string(),
            api_token: None,
            max_length: DEFAULT_MAX_LENGTH,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            segmentation: Segmentation::default(),
        }
    }
}

/// Placeholder printed instead of secrets
pub(crate) const REDACTED: &str = "***";

impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("model", &self.model)
            .field("engine_url", &self.engine_url)
            .field("api_token", &self.api_token.as_ref().map(|_| REDACTED))
            .field("max_length", &self.max_length)
            .field("timeout_ms", &self.timeout_ms)
            .field("segmentation", &self.segmentation)
            .finish()
    }
}

impl ServiceConfig {
    /// Load configuration from `T_*` environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = settings.try_deserialize()?;
        Ok(config)
    }

    /// Load and validate configuration
    pub fn load() -> anyhow::Result<Self> {
        let config = Self::from_env()?;
        config.validate()?;

        info!(
            "Loaded configuration: model={}, segmentation={}, bind={}:{}",
            config.model, config.segmentation, config.host, config.port
        );

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.model.trim().is_empty() {
            return Err(anyhow::anyhow!("model is required"));
        }

        if self.engine_url.trim().is_empty() {
            return Err(anyhow::anyhow!("engine_url is required"));
        }

        if self.port == 0 {
            return Err(anyhow::anyhow!("port must be greater than 0"));
        }

        if self.max_length == 0 {
            return Err(anyhow::anyhow!("max_length must be greater than 0"));
        }

        if self.timeout_ms == 0 {
            return Err(anyhow::anyhow!("timeout_ms must be greater than 0"));
        }

        Ok(())
    }

    /// Socket address string the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
