//! Output directory configuration for generated reports and logs.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default directory for generated reports.
fn default_output_dir() -> String {
    "output".to_string()
}

/// Default directory for log files.
fn default_logs_dir() -> String {
    "logs".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Where generated prognosis reports are written.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Where log files are written.
    #[serde(default = "default_logs_dir")]
    pub logs_dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            logs_dir: default_logs_dir(),
        }
    }
}

impl OutputConfig {
    /// Output directory as a path.
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.output_dir)
    }

    /// Logs directory as a path.
    pub fn logs_path(&self) -> PathBuf {
        PathBuf::from(&self.logs_dir)
    }
}
