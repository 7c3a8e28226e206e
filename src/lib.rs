//! M2M100 translation service
//!
//! This library exposes a line-preserving translation handler on top of a
//! pluggable translation engine, plus the HTTP API that serves it.

#![forbid(unsafe_code)]

pub mod cli;
pub mod core;
pub mod server;

// Re-export key types for convenience
pub use crate::core::{
    config::ServiceConfig,
    engine::{InferenceApiEngine, TranslationEngine},
    errors::TranslationError,
    models::{Segmentation, TranslationCandidate, TranslationRequest, TranslationResponse},
    translator::LineTranslator,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
