use serde::{Deserialize, Serialize};

fn default_source_lang() -> String {
    "en".to_string()
}

fn default_target_lang() -> String {
    "es".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SessionConfig {
    /// Language code selected as the source at session start.
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    /// Language code selected as the target at session start.
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            source_lang: default_source_lang(),
            target_lang: default_target_lang(),
        }
    }
}
