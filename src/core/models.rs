//! Core data models for translation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// How non-blank lines are handed to the engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Segmentation {
    /// Every non-blank line triggers a translation of the whole input text
    #[default]
    FullText,
    /// Every non-blank line is translated on its own
    PerLine,
}

impl fmt::Display for Segmentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segmentation::FullText => write!(f, "full-text"),
            Segmentation::PerLine => write!(f, "per-line"),
        }
    }
}

impl FromStr for Segmentation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full-text" => Ok(Segmentation::FullText),
            "per-line" => Ok(Segmentation::PerLine),
            other => Err(format!(
                "unknown segmentation '{}', expected 'full-text' or 'per-line'",
                other
            )),
        }
    }
}

/// Translation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TranslationRequest {
    /// Text to translate, may span several lines
    #[schema(example = "Hello\n\nWorld")]
    pub text: String,
    #[serde(rename = "from_lang")]
    #[schema(example = "en")]
    pub source_language: String,
    #[serde(rename = "to")]
    #[schema(example = "es")]
    pub target_language: String,
}

impl TranslationRequest {
    pub fn new(
        text: impl Into<String>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source_language: source_language.into(),
            target_language: target_language.into(),
        }
    }
}

/// Translation response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TranslationResponse {
    #[serde(rename = "translated")]
    pub translated_text: String,
    #[serde(rename = "model")]
    #[schema(example = "facebook/m2m100_418M")]
    pub model_identifier: String,
    #[serde(rename = "from_lang")]
    pub source_language: String,
    #[serde(rename = "to")]
    pub target_language: String,
}

impl TranslationResponse {
    /// Build a response echoing the language codes of `request`.
    pub fn for_request(
        request: &TranslationRequest,
        translated_text: String,
        model_identifier: impl Into<String>,
    ) -> Self {
        Self {
            translated_text,
            model_identifier: model_identifier.into(),
            source_language: request.source_language.clone(),
            target_language: request.target_language.clone(),
        }
    }
}

/// One candidate produced by the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationCandidate {
    pub translation_text: String,
}

impl TranslationCandidate {
    pub fn new(translation_text: impl Into<String>) -> Self {
        Self {
            translation_text: translation_text.into(),
        }
    }
}

/// Supported language entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}
