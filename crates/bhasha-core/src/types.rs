use crate::error::TranslateError;
use crate::language::Language;
use crate::session::SessionSnapshot;

/// Events crossing the collaborator boundary. Operations flow toward the
/// session's event loop; `StateChanged` flows back with a fresh snapshot
/// after every mutation.
#[derive(Debug, Clone)]
pub enum AppEvent {
    SetInputText(String),
    SetSourceLanguage(Language),
    SetTargetLanguage(Language),
    SwapLanguages,
    Translate,
    SetErrorMessage(Option<String>),
    TranslationFinished(Result<Translation, TranslateError>),
    StateChanged(SessionSnapshot),
    Shutdown,
}

/// Successful pipeline output. `dropped_chunks` counts chunk requests
/// that failed and were omitted from `text` in the long-text path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    pub dropped_chunks: usize,
}

/// One attempt's worth of request data, built by the session when the
/// attempt starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub source_code: String,
    pub target_code: String,
}
