//! Custom error types for translation operations

use thiserror::Error;

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Language code not known to the model
    #[error("Unsupported language code: '{code}'")]
    UnsupportedLanguage {
        code: String,
    },

    /// Input rejected by the model backend
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
    },

    /// Inference API request failed
    #[error("API error: {status} - {message}")]
    ApiError {
        status: u16,
        message: String,
    },

    /// Network error
    #[error("Network error: {message}")]
    NetworkError {
        message: String,
    },

    /// Invalid response from the inference API
    #[error("Invalid response: {message}")]
    InvalidResponseError {
        message: String,
    },

    /// Engine returned no candidate for a line
    #[error("No translation candidates returned")]
    EmptyTranslation,

    /// Request timeout
    #[error("Request timeout")]
    TimeoutError,

    /// Engine-side failure not covered by the variants above
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl TranslationError {
    /// Whether the failure was caused by the caller's input rather than the service.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TranslationError::UnsupportedLanguage { .. } | TranslationError::InvalidInput { .. }
        )
    }
}

impl From<reqwest::Error> for TranslationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TranslationError::TimeoutError
        } else if err.is_decode() {
            TranslationError::InvalidResponseError {
                message: err.to_string(),
            }
        } else {
            TranslationError::NetworkError {
                message: err.to_string(),
            }
        }
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
