use bhasha_core::chunk::chunk_text;
use bhasha_core::error::TranslateError;
use bhasha_core::language::find_language;
use bhasha_core::text::normalize;
use bhasha_core::types::{Translation, TranslationRequest};
use tracing::{debug, warn};

use crate::client::TranslateTransport;
use crate::decode::extract_translation;

/// Drives one translation attempt end to end: normalize, pick the
/// single-shot or chunked path, fetch and decode, join.
pub struct TranslationEngine<T> {
    transport: T,
    max_chunk_size: usize,
}

impl<T: TranslateTransport> TranslationEngine<T> {
    pub fn new(transport: T, max_chunk_size: usize) -> Self {
        Self {
            transport,
            max_chunk_size,
        }
    }

    /// Texts at or under the chunk bound take exactly one round trip and
    /// any failure fails the attempt. Longer texts are chunked at
    /// sentence boundaries and translated sequentially; a failed chunk is
    /// dropped from the output and counted, the rest still joins up.
    pub async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<Translation, TranslateError> {
        let normalized = normalize(&request.text);
        if normalized.is_empty() {
            return Err(TranslateError::EmptyInput);
        }

        let source = endpoint_code(&request.source_code);
        let target = endpoint_code(&request.target_code);

        let mut dropped = 0usize;
        let translated = if normalized.chars().count() <= self.max_chunk_size {
            self.translate_piece(&normalized, &source, &target).await?
        } else {
            let chunks = chunk_text(&normalized, self.max_chunk_size);
            debug!(
                chunks = chunks.len(),
                "input past the single-request limit, chunking"
            );

            let mut parts = Vec::with_capacity(chunks.len());
            for chunk in &chunks {
                match self.translate_piece(chunk, &source, &target).await {
                    Ok(text) => parts.push(text),
                    Err(e) => {
                        warn!("dropping failed chunk: {e}");
                        dropped += 1;
                    }
                }
            }
            parts.join(" ").trim().to_string()
        };

        if translated.is_empty() {
            return Err(TranslateError::EmptyTranslation);
        }

        Ok(Translation {
            text: translated,
            dropped_chunks: dropped,
        })
    }

    async fn translate_piece(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslateError> {
        let raw = self.transport.fetch(text, source, target).await?;
        extract_translation(&raw)
    }
}

/// Maps a selection code into the endpoint's code space: supported codes
/// map onto themselves, anything else passes through lowercased.
fn endpoint_code(code: &str) -> String {
    let code = code.to_lowercase();
    match find_language(&code) {
        Some(language) => language.code.clone(),
        None => code,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use bhasha_core::error::ErrorKind;

    use super::*;

    /// Uppercases whatever it is asked to translate, recording every
    /// call; texts containing `fail_needle` error instead.
    #[derive(Default)]
    struct EchoTransport {
        calls: Mutex<Vec<String>>,
        fail_needle: Option<&'static str>,
    }

    impl EchoTransport {
        fn failing_on(needle: &'static str) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_needle: Some(needle),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TranslateTransport for EchoTransport {
        async fn fetch(
            &self,
            text: &str,
            _source_code: &str,
            _target_code: &str,
        ) -> Result<String, TranslateError> {
            self.calls.lock().unwrap().push(text.to_string());
            if self.fail_needle.is_some_and(|needle| text.contains(needle)) {
                return Err(TranslateError::Network("connection reset".to_string()));
            }
            Ok(format!(
                r#"[[[{:?},{:?},null,null,1]],null,"en"]"#,
                text.to_uppercase(),
                text
            ))
        }
    }

    fn request(text: &str) -> TranslationRequest {
        TranslationRequest {
            text: text.to_string(),
            source_code: "en".to_string(),
            target_code: "es".to_string(),
        }
    }

    #[tokio::test]
    async fn short_text_takes_exactly_one_round_trip() {
        let transport = Arc::new(EchoTransport::default());
        let engine = TranslationEngine::new(Arc::clone(&transport), 4500);

        let translation = engine.translate(&request("Hello world")).await.unwrap();

        assert_eq!(translation.text, "HELLO WORLD");
        assert_eq!(translation.dropped_chunks, 0);
        assert_eq!(transport.calls(), ["Hello world"]);
    }

    #[tokio::test]
    async fn input_is_normalized_before_dispatch() {
        let transport = Arc::new(EchoTransport::default());
        let engine = TranslationEngine::new(Arc::clone(&transport), 4500);

        engine.translate(&request("  hello   world  ")).await.unwrap();

        assert_eq!(transport.calls(), ["hello world"]);
    }

    #[tokio::test]
    async fn blank_input_fails_without_a_request() {
        let transport = Arc::new(EchoTransport::default());
        let engine = TranslationEngine::new(Arc::clone(&transport), 4500);

        let err = engine.translate(&request("   \n ")).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::EmptyInput);
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn long_text_is_chunked_in_order() {
        let transport = Arc::new(EchoTransport::default());
        let engine = TranslationEngine::new(Arc::clone(&transport), 20);

        let translation = engine
            .translate(&request("This is sentence one. This is sentence two."))
            .await
            .unwrap();

        assert_eq!(
            transport.calls(),
            ["This is sentence one.", "This is sentence two."]
        );
        assert_eq!(
            translation.text,
            "THIS IS SENTENCE ONE. THIS IS SENTENCE TWO."
        );
        assert_eq!(translation.dropped_chunks, 0);
    }

    #[tokio::test]
    async fn failed_chunk_is_dropped_and_counted() {
        let transport = Arc::new(EchoTransport::failing_on("two"));
        let engine = TranslationEngine::new(Arc::clone(&transport), 20);

        let translation = engine
            .translate(&request("Sentence number one. Sentence number two. Sentence number three."))
            .await
            .unwrap();

        assert_eq!(
            translation.text,
            "SENTENCE NUMBER ONE. SENTENCE NUMBER THREE."
        );
        assert_eq!(translation.dropped_chunks, 1);
    }

    #[tokio::test]
    async fn all_chunks_failing_is_empty_translation() {
        let transport = Arc::new(EchoTransport::failing_on("Sentence"));
        let engine = TranslationEngine::new(Arc::clone(&transport), 20);

        let err = engine
            .translate(&request("Sentence number one. Sentence number two."))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::EmptyTranslation);
    }

    #[tokio::test]
    async fn single_path_failure_fails_the_attempt() {
        let transport = Arc::new(EchoTransport::failing_on("Hello"));
        let engine = TranslationEngine::new(Arc::clone(&transport), 4500);

        let err = engine.translate(&request("Hello")).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Network);
    }

    #[test]
    fn endpoint_codes_are_lowercased() {
        assert_eq!(endpoint_code("EN"), "en");
        assert_eq!(endpoint_code("Hi"), "hi");
        assert_eq!(endpoint_code("FR"), "fr");
    }
}
