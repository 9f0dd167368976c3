use std::env;

use serde::{Deserialize, Serialize};

use self::session::SessionConfig;
use self::translator::TranslatorConfig;

pub mod session;
pub mod translator;

#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub translator: TranslatorConfig,
    pub session: SessionConfig,
}

impl Config {
    /// Defaults with environment overrides applied.
    pub fn new() -> Self {
        let mut config = Config::default();

        if let Ok(endpoint) = env::var("BHASHA_ENDPOINT") {
            config.translator.endpoint = endpoint;
        }
        if let Some(max) = env::var("BHASHA_MAX_CHUNK_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.translator.max_chunk_size = max;
        }
        if let Some(timeout) = env::var("BHASHA_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.translator.timeout_secs = timeout;
        }
        if let Ok(code) = env::var("BHASHA_SOURCE_LANG") {
            config.session.source_lang = code;
        }
        if let Ok(code) = env::var("BHASHA_TARGET_LANG") {
            config.session.target_lang = code;
        }

        config
    }
}
