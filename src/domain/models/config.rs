use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for phyloverify
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Report rendering and run configuration
    #[serde(default)]
    pub report: ReportConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for log files (optional, if None logs only go to stderr)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Log file rotation: daily, hourly or never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
        }
    }
}

/// Report configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ReportConfig {
    /// Label languages to try, in order, before untagged labels
    #[serde(default = "default_preferred_languages")]
    pub preferred_languages: Vec<String>,

    /// URI prefixes stripped from ids when they are displayed
    #[serde(default)]
    pub strip_uri_prefixes: Vec<String>,

    /// Maximum number of oracle queries in flight (1 = sequential)
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

fn default_preferred_languages() -> Vec<String> {
    vec!["en".to_string()]
}

const fn default_concurrency() -> usize {
    1
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            preferred_languages: default_preferred_languages(),
            strip_uri_prefixes: Vec::new(),
            concurrency: default_concurrency(),
        }
    }
}
