/// Collapses internal whitespace runs to a single space and trims the
/// ends. Returns an empty string for blank input; the engine turns that
/// into an `EmptyInput` failure.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_runs_and_trims() {
        assert_eq!(normalize("  hello   world  "), "hello world");
    }

    #[test]
    fn folds_newlines_and_tabs() {
        assert_eq!(normalize("one\n\ttwo\r\n three"), "one two three");
    }

    #[test]
    fn blank_input_normalizes_to_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t "), "");
    }

    #[test]
    fn already_normalized_text_is_unchanged() {
        assert_eq!(normalize("hello world"), "hello world");
    }
}
