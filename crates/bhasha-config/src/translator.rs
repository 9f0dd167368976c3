use bhasha_core::chunk::DEFAULT_MAX_CHUNK_SIZE;
use serde::{Deserialize, Serialize};

fn default_endpoint() -> String {
    "https://translate.googleapis.com".to_string()
}

fn default_max_chunk_size() -> usize {
    DEFAULT_MAX_CHUNK_SIZE
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Base URL of the translation endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Upper bound in characters for a single request; longer texts are
    /// chunked at sentence boundaries.
    #[serde(default = "default_max_chunk_size")]
    pub max_chunk_size: usize,
    /// Transport-level timeout applied when the HTTP client is built.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            max_chunk_size: default_max_chunk_size(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
