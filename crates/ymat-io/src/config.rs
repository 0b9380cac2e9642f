//! Configuration file support.
//!
//! ```toml
//! [report]
//! format = "dense"     # dense | sparse | json
//! width = 14
//! precision = 6
//!
//! [logging]
//! level = "warn"
//! ```
//!
//! Every key is optional. Command-line flags take precedence.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::report::ReportConfig;

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct YmatConfig {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Load a configuration file.
pub fn load_config(path: &Path) -> Result<YmatConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file: {}", path.display()))?;
    let config: YmatConfig = toml::from_str(&contents)
        .with_context(|| format!("parsing config file: {}", path.display()))?;
    Ok(config)
}
