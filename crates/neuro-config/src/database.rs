//! Database configuration for the persistence collaborator.

use serde::{Deserialize, Serialize};

/// Default connection URL: a local SQLite file next to the app.
fn default_url() -> String {
    "sqlite://./neuro_tracker.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Connection URL (e.g. `sqlite://./neuro_tracker.db`).
    #[serde(default = "default_url")]
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { url: default_url() }
    }
}

impl DatabaseConfig {
    /// Check whether the URL points at an on-disk SQLite file.
    pub fn is_sqlite(&self) -> bool {
        self.url.starts_with("sqlite://")
    }
}
