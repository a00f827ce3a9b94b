//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default log filter level.
fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Whether to run in debug mode.
    #[serde(default)]
    pub debug: bool,

    /// Log filter level (`trace`, `debug`, `info`, `warn`, `error`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            debug: false,
            log_level: default_log_level(),
        }
    }
}
