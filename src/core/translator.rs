//! Request handler that runs text through the engine line by line

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::core::config::ServiceConfig;
use crate::core::engine::TranslationEngine;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::{Segmentation, TranslationRequest, TranslationResponse};

/// A line counts as blank when it only holds whitespace or the ASCII
/// information separators (U+001C..=U+001F).
fn is_blank(line: &str) -> bool {
    line.chars()
        .all(|c| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}

/// Translation request handler.
///
/// Splits the input on `'\n'`, keeps blank lines as empty lines and asks the
/// engine for a translation for every other line. With
/// [`Segmentation::FullText`] each of those calls receives the whole request
/// text, so a text with N non-blank lines costs N full translations.
#[derive(Clone)]
pub struct LineTranslator {
    engine: Arc<dyn TranslationEngine>,
    max_length: usize,
    segmentation: Segmentation,
}

impl LineTranslator {
    /// Create a new handler around a shared engine
    pub fn new(engine: Arc<dyn TranslationEngine>, max_length: usize, segmentation: Segmentation) -> Self {
        Self {
            engine,
            max_length,
            segmentation,
        }
    }

    /// Create from service configuration
    pub fn from_config(engine: Arc<dyn TranslationEngine>, config: &ServiceConfig) -> Self {
        Self::new(engine, config.max_length, config.segmentation)
    }

    pub fn model_id(&self) -> &str {
        self.engine.model_id()
    }

    /// Translate a single request
    pub async fn translate(&self, request: &TranslationRequest) -> Result<TranslationResponse> {
        let lines: Vec<&str> = request.text.split('\n').collect();
        debug!(
            "Translating {} lines {} -> {} ({})",
            lines.len(),
            request.source_language,
            request.target_language,
            self.segmentation
        );

        let mut out_lines = Vec::with_capacity(lines.len());
        let mut engine_calls = 0usize;

        for line in &lines {
            if is_blank(line) {
                out_lines.push(String::new());
                continue;
            }

            let input = match self.segmentation {
                Segmentation::FullText => request.text.as_str(),
                Segmentation::PerLine => *line,
            };

            let translated = self.translate_segment(input, request).await?;
            engine_calls += 1;
            out_lines.push(translated);
        }

        info!(
            "Translated {} lines with {} engine calls ({} -> {})",
            lines.len(),
            engine_calls,
            request.source_language,
            request.target_language
        );

        Ok(TranslationResponse::for_request(
            request,
            out_lines.join("\n"),
            self.engine.model_id(),
        ))
    }

    /// Run one engine call and keep its first candidate
    async fn translate_segment(&self, text: &str, request: &TranslationRequest) -> Result<String> {
        let candidates = self
            .engine
            .translate(
                text,
                &request.source_language,
                &request.target_language,
                self.max_length,
            )
            .await
            .map_err(|e| {
                warn!("Engine call failed: {}", e);
                e
            })?;

        candidates
            .into_iter()
            .next()
            .map(|c| c.translation_text)
            .ok_or(TranslationError::EmptyTranslation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::languages;
    use crate::core::models::TranslationCandidate;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Engine that records every call and answers with a tagged copy of the input
    #[derive(Default)]
    struct RecordingEngine {
        calls: Mutex<Vec<(String, String, String, usize)>>,
        fail_with: Option<fn() -> TranslationError>,
        no_candidates: bool,
    }

    impl RecordingEngine {
        fn calls(&self) -> Vec<(String, String, String, usize)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TranslationEngine for RecordingEngine {
        fn model_id(&self) -> &str {
            "test/recording"
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

            self.calls.lock().unwrap().push((
                text.to_string(),
                source_lang.to_string(),
                target_lang.to_string(),
                max_length,
            ));

            if let Some(make_err) = self.fail_with {
                return Err(make_err());
            }
            if self.no_candidates {
                return Ok(vec![]);
            }

            Ok(vec![
                TranslationCandidate::new(format!("[{}] {}", target_lang, text.replace('\n', " | "))),
                TranslationCandidate::new("second candidate"),
            ])
        }
    }

    fn translator(engine: Arc<RecordingEngine>, segmentation: Segmentation) -> LineTranslator {
        LineTranslator::new(engine, 512, segmentation)
    }

    #[tokio::test]
    async fn test_blank_line_is_preserved_between_translations() {
        let engine = Arc::new(RecordingEngine::default());
        let request = TranslationRequest::new("Hello\n\nWorld", "en", "es");

        let response = translator(engine.clone(), Segmentation::FullText)
            .translate(&request)
            .await
            .unwrap();

        let lines: Vec<&str> = response.translated_text.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert!(!lines[0].is_empty());
        assert_eq!(lines[1], "");
        assert!(!lines[2].is_empty());
        assert_eq!(response.model_identifier, "test/recording");
    }

    #[tokio::test]
    async fn test_full_text_mode_translates_whole_text_once_per_line() {
        let engine = Arc::new(RecordingEngine::default());
        let text = "one\ntwo\n  \nthree";
        let request = TranslationRequest::new(text, "en", "de");

        let response = translator(engine.clone(), Segmentation::FullText)
            .translate(&request)
            .await
            .unwrap();

        let calls = engine.calls();
        assert_eq!(calls.len(), 3);
        for (input, src, tgt, max_length) in &calls {
            assert_eq!(input, text);
            assert_eq!(src, "en");
            assert_eq!(tgt, "de");
            assert_eq!(*max_length, 512);
        }

        let full = "[de] one | two |    | three";
        assert_eq!(
            response.translated_text,
            format!("{full}\n{full}\n\n{full}")
        );
    }

    #[tokio::test]
    async fn test_per_line_mode_translates_each_line() {
        let engine = Arc::new(RecordingEngine::default());
        let request = TranslationRequest::new("one\n\ntwo", "en", "fr");

        let response = translator(engine.clone(), Segmentation::PerLine)
            .translate(&request)
            .await
            .unwrap();

        let inputs: Vec<String> = engine.calls().into_iter().map(|c| c.0).collect();
        assert_eq!(inputs, vec!["one", "two"]);
        assert_eq!(response.translated_text, "[fr] one\n\n[fr] two");
    }

    #[tokio::test]
    async fn test_blank_input_never_calls_engine() {
        for text in ["", "   ", "\n", " \n\t\n"] {
            let engine = Arc::new(RecordingEngine::default());
            let request = TranslationRequest::new(text, "en", "es");

            let response = translator(engine.clone(), Segmentation::FullText)
                .translate(&request)
                .await
                .unwrap();

            let expected_lines = text.split('\n').count();
            assert_eq!(response.translated_text, "\n".repeat(expected_lines - 1));
            assert!(engine.calls().is_empty());
        }
    }

    #[tokio::test]
    async fn test_separator_only_line_counts_as_blank() {
        let engine = Arc::new(RecordingEngine::default());
        let request = TranslationRequest::new("Hi\n\u{1f}", "en", "es");

        let response = translator(engine.clone(), Segmentation::FullText)
            .translate(&request)
            .await
            .unwrap();

        assert_eq!(engine.calls().len(), 1);
        assert_eq!(response.translated_text, "[es] Hi | \u{1f}\n");
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\r"));
        assert!(is_blank("\u{1c}\u{1d}\u{1e}\u{1f}"));
        assert!(is_blank("\u{a0}\u{3000}"));
        assert!(!is_blank(" x "));
        assert!(!is_blank("\u{1b}"));
    }

    #[tokio::test]
    async fn test_concurrent_requests_keep_their_own_languages() {
        let engine = Arc::new(RecordingEngine::default());
        let handler = translator(engine.clone(), Segmentation::PerLine);

        let to_spanish = TranslationRequest::new("Hello\nWorld", "en", "es");
        let to_german = TranslationRequest::new("Bonjour\nMonde", "fr", "de");
        let to_japanese = TranslationRequest::new("Hola", "es", "ja");

        let (es, de, ja) = tokio::join!(
            handler.translate(&to_spanish),
            handler.translate(&to_german),
            handler.translate(&to_japanese),
        );

        let (es, de, ja) = (es.unwrap(), de.unwrap(), ja.unwrap());
        assert_eq!(es.translated_text, "[es] Hello\n[es] World");
        assert_eq!((es.source_language.as_str(), es.target_language.as_str()), ("en", "es"));
        assert_eq!(de.translated_text, "[de] Bonjour\n[de] Monde");
        assert_eq!((de.source_language.as_str(), de.target_language.as_str()), ("fr", "de"));
        assert_eq!(ja.translated_text, "[ja] Hola");
        assert_eq!((ja.source_language.as_str(), ja.target_language.as_str()), ("es", "ja"));

        let calls = engine.calls();
        assert_eq!(calls.len(), 5);
        for (text, src, tgt, _) in &calls {
            let expected = match text.as_str() {
                "Hello" | "World" => ("en", "es"),
                "Bonjour" | "Monde" => ("fr", "de"),
                "Hola" => ("es", "ja"),
                other => panic!("unexpected engine input: {other}"),
            };
            assert_eq!((src.as_str(), tgt.as_str()), expected);
        }
    }

    #[tokio::test]
    async fn test_languages_are_echoed() {
        let engine = Arc::new(RecordingEngine::default());
        let request = TranslationRequest::new("Good morning", "en", "ja");

        let response = translator(engine, Segmentation::FullText)
            .translate(&request)
            .await
            .unwrap();

        assert_eq!(response.source_language, request.source_language);
        assert_eq!(response.target_language, request.target_language);
    }

    #[tokio::test]
    async fn test_unknown_language_is_validation_error() {
        let engine = Arc::new(RecordingEngine::default());
        let request = TranslationRequest::new("Hello", "en", "zz");

        let err = translator(engine, Segmentation::FullText)
            .translate(&request)
            .await
            .unwrap_err();

        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_engine_failure_stops_translation() {
        let engine = Arc::new(RecordingEngine {
            fail_with: Some(|| TranslationError::TimeoutError),
            ..Default::default()
        });
        let request = TranslationRequest::new("a\nb\nc", "en", "es");

        let err = translator(engine.clone(), Segmentation::FullText)
            .translate(&request)
            .await
            .unwrap_err();

        assert!(!err.is_validation());
        assert_eq!(engine.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_candidates_is_an_error() {
        let engine = Arc::new(RecordingEngine {
            no_candidates: true,
            ..Default::default()
        });
        let request = TranslationRequest::new("Hello", "en", "es");

        let err = translator(engine, Segmentation::FullText)
            .translate(&request)
            .await
            .unwrap_err();

        assert!(matches!(err, TranslationError::EmptyTranslation));
    }
}
