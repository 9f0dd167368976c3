use tracing::debug;

use crate::error::{ErrorKind, TranslateError};
use crate::language::{Language, supported_languages};
use crate::types::{Translation, TranslationRequest};

/// Error surfaced to the collaborator. `kind` is absent only for
/// messages injected from outside the pipeline via `set_error_message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionError {
    pub kind: Option<ErrorKind>,
    pub message: String,
}

impl SessionError {
    fn injected(message: String) -> Self {
        Self {
            kind: None,
            message,
        }
    }

    fn from_failure(err: &TranslateError) -> Self {
        Self {
            kind: Some(err.kind()),
            message: format!("Translation failed: {err}"),
        }
    }
}

/// Read-only view of the session handed to the collaborator.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub input_text: String,
    pub translated_text: String,
    pub source_language: Language,
    pub target_language: Language,
    pub is_loading: bool,
    pub error: Option<SessionError>,
    pub dropped_chunks: usize,
}

/// One collaborator lifetime's worth of translation state.
///
/// Owned and mutated by a single task; all mutation goes through the
/// methods below so the loading guard and the failed-attempt-clears-
/// translation invariant hold.
pub struct Session {
    input_text: String,
    translated_text: String,
    source: Language,
    target: Language,
    is_loading: bool,
    error: Option<SessionError>,
    dropped_chunks: usize,
}

impl Session {
    pub fn new(source: Language, target: Language) -> Self {
        Self {
            input_text: String::new(),
            translated_text: String::new(),
            source,
            target,
            is_loading: false,
            error: None,
            dropped_chunks: 0,
        }
    }

    /// English to Spanish, empty text.
    pub fn with_defaults() -> Self {
        let languages = supported_languages();
        Self::new(languages[0].clone(), languages[1].clone())
    }

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    pub fn set_source_language(&mut self, language: Language) {
        self.source = language;
    }

    pub fn set_target_language(&mut self, language: Language) {
        self.target = language;
    }

    /// Message injected by the collaborator, e.g. a connectivity check
    /// that fails before the pipeline is ever invoked.
    pub fn set_error_message(&mut self, message: Option<String>) {
        self.error = message.map(SessionError::injected);
    }

    /// Exchanges the selected languages and seeds the next input from the
    /// previous translation when one exists. Clears the translation and
    /// any error. Returns whether the caller should trigger a fresh
    /// translation of the new input.
    pub fn swap_languages(&mut self) -> bool {
        std::mem::swap(&mut self.source, &mut self.target);
        if self.translated_text.trim().is_empty() {
            self.translated_text.clear();
        } else {
            self.input_text = std::mem::take(&mut self.translated_text);
        }
        self.error = None;
        !self.input_text.trim().is_empty()
    }

    /// Starts a translate attempt. Yields the request to run, or `None`
    /// when the input is blank (stores "Please enter text" without
    /// touching the loading flag) or when an attempt is already in
    /// flight (rejected outright, not queued).
    pub fn begin_translate(&mut self) -> Option<TranslationRequest> {
        let text = self.input_text.trim();
        if text.is_empty() {
            self.error = Some(SessionError {
                kind: Some(ErrorKind::EmptyInput),
                message: "Please enter text".to_string(),
            });
            return None;
        }
        if self.is_loading {
            debug!("translate requested while an attempt is in flight, rejecting");
            return None;
        }

        self.is_loading = true;
        self.dropped_chunks = 0;
        Some(TranslationRequest {
            text: text.to_string(),
            source_code: self.source.code.clone(),
            target_code: self.target.code.clone(),
        })
    }

    /// Applies the outcome of the attempt started by `begin_translate`.
    /// A failure clears the stale translation before storing the error.
    pub fn finish_translate(&mut self, result: Result<Translation, TranslateError>) {
        self.is_loading = false;
        match result {
            Ok(translation) => {
                self.translated_text = translation.text;
                self.dropped_chunks = translation.dropped_chunks;
                self.error = None;
            }
            Err(err) => {
                self.translated_text.clear();
                self.error = Some(SessionError::from_failure(&err));
            }
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            input_text: self.input_text.clone(),
            translated_text: self.translated_text.clone(),
            source_language: self.source.clone(),
            target_language: self.target.clone(),
            is_loading: self.is_loading,
            error: self.error.clone(),
            dropped_chunks: self.dropped_chunks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translation(text: &str) -> Translation {
        Translation {
            text: text.to_string(),
            dropped_chunks: 0,
        }
    }

    #[test]
    fn defaults_are_english_to_spanish() {
        let session = Session::with_defaults();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.source_language.code, "en");
        assert_eq!(snapshot.target_language.code, "es");
        assert!(snapshot.input_text.is_empty());
        assert!(!snapshot.is_loading);
    }

    #[test]
    fn begin_translate_with_blank_input_sets_error_without_loading() {
        let mut session = Session::with_defaults();
        session.set_input_text("   ");

        assert!(session.begin_translate().is_none());

        let snapshot = session.snapshot();
        assert!(!snapshot.is_loading);
        let error = snapshot.error.expect("error should be set");
        assert_eq!(error.message, "Please enter text");
        assert_eq!(error.kind, Some(ErrorKind::EmptyInput));
    }

    #[test]
    fn begin_translate_builds_request_and_enters_loading() {
        let mut session = Session::with_defaults();
        session.set_input_text("  Hello  ");

        let request = session.begin_translate().expect("request");
        assert_eq!(request.text, "Hello");
        assert_eq!(request.source_code, "en");
        assert_eq!(request.target_code, "es");
        assert!(session.snapshot().is_loading);
    }

    #[test]
    fn begin_translate_rejects_while_in_flight() {
        let mut session = Session::with_defaults();
        session.set_input_text("Hello");

        assert!(session.begin_translate().is_some());
        assert!(session.begin_translate().is_none());

        // The rejected attempt leaves the state untouched.
        let snapshot = session.snapshot();
        assert!(snapshot.is_loading);
        assert!(snapshot.error.is_none());
    }

    #[test]
    fn finish_translate_success_stores_text_and_clears_error() {
        let mut session = Session::with_defaults();
        session.set_error_message(Some("stale".to_string()));
        session.set_input_text("Hello");
        session.begin_translate().expect("request");

        session.finish_translate(Ok(translation("Hola")));

        let snapshot = session.snapshot();
        assert!(!snapshot.is_loading);
        assert_eq!(snapshot.translated_text, "Hola");
        assert!(snapshot.error.is_none());
    }

    #[test]
    fn finish_translate_failure_clears_translation_and_carries_kind() {
        let mut session = Session::with_defaults();
        session.set_input_text("Hello");
        session.begin_translate().expect("request");
        session.finish_translate(Ok(translation("Hola")));

        session.begin_translate().expect("request");
        session.finish_translate(Err(TranslateError::Network("timed out".to_string())));

        let snapshot = session.snapshot();
        assert!(!snapshot.is_loading);
        assert!(snapshot.translated_text.is_empty());
        let error = snapshot.error.expect("error should be set");
        assert_eq!(error.kind, Some(ErrorKind::Network));
        assert_eq!(error.message, "Translation failed: network error: timed out");
    }

    #[test]
    fn finish_translate_surfaces_dropped_chunks() {
        let mut session = Session::with_defaults();
        session.set_input_text("Hello");
        session.begin_translate().expect("request");

        session.finish_translate(Ok(Translation {
            text: "Hola".to_string(),
            dropped_chunks: 2,
        }));

        assert_eq!(session.snapshot().dropped_chunks, 2);
    }

    #[test]
    fn swap_seeds_input_from_translation_and_requests_retranslate() {
        let mut session = Session::with_defaults();
        session.set_input_text("Hello");
        session.begin_translate().expect("request");
        session.finish_translate(Ok(translation("Hola")));

        assert!(session.swap_languages());

        let snapshot = session.snapshot();
        assert_eq!(snapshot.source_language.code, "es");
        assert_eq!(snapshot.target_language.code, "en");
        assert_eq!(snapshot.input_text, "Hola");
        assert!(snapshot.translated_text.is_empty());
        assert!(snapshot.error.is_none());
    }

    #[test]
    fn swap_without_translation_keeps_input() {
        let mut session = Session::with_defaults();
        session.set_input_text("Hello");

        assert!(session.swap_languages());
        assert_eq!(session.snapshot().input_text, "Hello");
    }

    #[test]
    fn swap_with_nothing_to_translate_requests_nothing() {
        let mut session = Session::with_defaults();
        assert!(!session.swap_languages());
    }

    #[test]
    fn injected_error_message_has_no_kind() {
        let mut session = Session::with_defaults();
        session.set_error_message(Some("No internet connection".to_string()));

        let error = session.snapshot().error.expect("error should be set");
        assert_eq!(error.kind, None);
        assert_eq!(error.message, "No internet connection");

        session.set_error_message(None);
        assert!(session.snapshot().error.is_none());
    }

    #[test]
    fn set_input_text_leaves_loading_and_error_alone() {
        let mut session = Session::with_defaults();
        session.set_input_text("Hello");
        session.begin_translate().expect("request");

        session.set_input_text("Hello again");

        let snapshot = session.snapshot();
        assert!(snapshot.is_loading);
        assert_eq!(snapshot.input_text, "Hello again");
    }
}
