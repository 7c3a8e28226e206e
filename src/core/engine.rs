//! Translation engines
//!
//! The request handler only depends on the [`TranslationEngine`] trait. The
//! production implementation, [`InferenceApiEngine`], runs the M2M100 model
//! behind a Hugging Face style inference endpoint.

use async_trait::async_trait;
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

use crate::core::config::{ServiceConfig, REDACTED};
use crate::core::errors::{Result, TranslationError};
use crate::core::languages;
use crate::core::models::TranslationCandidate;

/// Capability that turns text into translation candidates.
///
/// Language codes are passed on every call; implementations must not keep
/// per-request state, since one instance serves all concurrent requests.
#[async_trait]
pub trait TranslationEngine: Send + Sync {
    /// Identifier of the model producing the translations
    fn model_id(&self) -> &str;

    /// Translate `text` from `source_lang` to `target_lang`.
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
        max_length: usize,
    ) -> Result<Vec<TranslationCandidate>>;
}

/// Engine backed by a remote inference API
#[derive(Clone)]
pub struct InferenceApiEngine {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_token: Option<String>,
}

impl fmt::Debug for InferenceApiEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InferenceApiEngine")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_token", &self.api_token.as_ref().map(|_| REDACTED))
            .finish_non_exhaustive()
    }
}

impl InferenceApiEngine {
    /// Create a new engine
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_token,
        })
    }

    /// Create from service configuration
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        Self::new(
            &config.engine_url,
            &config.model,
            config.api_token.clone(),
            Duration::from_millis(config.timeout_ms),
        )
    }

    fn model_url(&self) -> String {
        format!("{}/{}", self.endpoint, self.model)
    }
}

/// Pull a human readable message out of an inference API error body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| match &json["error"] {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Array(items) => Some(
                items
                    .iter()
                    .filter_map(|v| v.as_str())
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
            _ => None,
        })
        .filter(|msg| !msg.is_empty())
        .unwrap_or_else(|| body.trim().to_string())
}

#[async_trait]
impl TranslationEngine for InferenceApiEngine {
    fn model_id(&self) -> &str {
        &self.model
    }

    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
        max_length: usize,
    ) -> Result<Vec<TranslationCandidate>> {
        languages::ensure_supported(source_lang)?;
        languages::ensure_supported(target_lang)?;

        let body = serde_json::json!({
            "inputs": text,
            "parameters": {
                "src_lang": source_lang,
                "tgt_lang": target_lang,
                "max_length": max_length,
            },
            "options": {
                "wait_for_model": true
            }
        });

        debug!(
            "Requesting {} translation {} -> {} ({} chars)",
            self.model,
            source_lang,
            target_lang,
            text.chars().count()
        );

        let mut request = self.client.post(self.model_url()).json(&body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            let candidates: Vec<TranslationCandidate> = response.json().await?;
            return Ok(candidates);
        }

        let status_code = status.as_u16();
        let message = error_message(&response.text().await.unwrap_or_default());
        warn!("Inference API returned {}: {}", status_code, message);

        match status_code {
            400 | 422 => Err(TranslationError::InvalidInput { message }),
            _ => Err(TranslationError::ApiError {
                status: status_code,
                message,
            }),
        }
    }
}
