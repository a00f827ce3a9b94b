//! OpenAI API configuration for the agent collaborators.

use serde::{Deserialize, Serialize};

/// Default chat model for the clinical agents.
fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpenAiConfig {
    /// API key. Empty means the agent collaborators cannot run.
    #[serde(default)]
    pub api_key: String,

    /// Chat model identifier.
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
        }
    }
}

impl OpenAiConfig {
    /// Check whether an API key is available.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}
