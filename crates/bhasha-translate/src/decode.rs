use bhasha_core::error::TranslateError;
use serde_json::Value;

/// Longest slice of the raw response carried inside error messages.
const RAW_SNIPPET_LEN: usize = 200;

/// Extracts the translated text from the endpoint's nested-array payload:
/// `[[[segment, original, null, null, confidence], ...], null, detected]`.
///
/// Inner items that do not match the expected shape are skipped; a
/// partial decode is acceptable as long as something was translated.
pub fn extract_translation(raw: &str) -> Result<String, TranslateError> {
    let raw = raw.trim();

    let payload: Value = serde_json::from_str(raw).map_err(|e| {
        TranslateError::MalformedResponse(format!("{e}; response: {}", snippet(raw)))
    })?;

    let outer = payload.as_array().ok_or_else(|| {
        TranslateError::MalformedResponse(format!(
            "expected a top-level array; response: {}",
            snippet(raw)
        ))
    })?;

    let segments = outer.first().and_then(Value::as_array).ok_or_else(|| {
        TranslateError::MalformedResponse(format!(
            "first element is not an array; response: {}",
            snippet(raw)
        ))
    })?;

    let mut translated = String::new();
    for item in segments {
        if let Some(text) = item
            .as_array()
            .and_then(|parts| parts.first())
            .and_then(Value::as_str)
        {
            if !text.trim().is_empty() {
                translated.push_str(text);
            }
        }
    }

    let translated = translated.trim();
    if translated.is_empty() {
        return Err(TranslateError::NoTranslationFound(snippet(raw)));
    }
    Ok(translated.to_string())
}

fn snippet(raw: &str) -> String {
    raw.chars().take(RAW_SNIPPET_LEN).collect()
}
