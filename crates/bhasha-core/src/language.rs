use std::sync::OnceLock;

/// A selectable language. Equality is by code, case-insensitive; the
/// display name never participates in comparisons.
#[derive(Debug, Clone)]
pub struct Language {
    pub code: String,
    pub name: String,
}

impl Language {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

impl PartialEq for Language {
    fn eq(&self, other: &Self) -> bool {
        self.code.eq_ignore_ascii_case(&other.code)
    }
}

impl Eq for Language {}

static SUPPORTED: OnceLock<Vec<Language>> = OnceLock::new();

/// The fixed set of languages the session offers.
pub fn supported_languages() -> &'static [Language] {
    SUPPORTED.get_or_init(|| {
        vec![
            Language::new("en", "English"),
            Language::new("es", "Spanish"),
            Language::new("hi", "Hindi"),
            Language::new("pa", "Punjabi"),
        ]
    })
}

/// Case-insensitive lookup in the supported set.
pub fn find_language(code: &str) -> Option<&'static Language> {
    supported_languages()
        .iter()
        .find(|language| language.code.eq_ignore_ascii_case(code))
}
