use thiserror::Error;

/// Failure kinds of a translation attempt, stripped of payload.
///
/// Carried into the session next to the display message so a collaborator
/// can branch on the kind without re-parsing error text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyInput,
    Network,
    EmptyResponse,
    MalformedResponse,
    NoTranslationFound,
    EmptyTranslation,
}

/// Errors of a single translation attempt. Every variant is recoverable;
/// none outlives the attempt that produced it.
#[derive(Debug, Clone, Error)]
pub enum TranslateError {
    #[error("input text is empty")]
    EmptyInput,

    #[error("network error: {0}")]
    Network(String),

    #[error("empty response from translation endpoint")]
    EmptyResponse,

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("no translation found in response: {0}")]
    NoTranslationFound(String),

    #[error("translation returned empty result")]
    EmptyTranslation,
}

impl TranslateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TranslateError::EmptyInput => ErrorKind::EmptyInput,
            TranslateError::Network(_) => ErrorKind::Network,
            TranslateError::EmptyResponse => ErrorKind::EmptyResponse,
            TranslateError::MalformedResponse(_) => ErrorKind::MalformedResponse,
            TranslateError::NoTranslationFound(_) => ErrorKind::NoTranslationFound,
            TranslateError::EmptyTranslation => ErrorKind::EmptyTranslation,
        }
    }
}
