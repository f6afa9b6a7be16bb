use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Largest accepted `report.concurrency`
pub const MAX_CONCURRENCY: usize = 64;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidRotation(String),

    #[error("Invalid concurrency: {0}. Must be between 1 and {MAX_CONCURRENCY}")]
    InvalidConcurrency(usize),

    #[error("URI prefixes to strip cannot be empty")]
    EmptyUriPrefix,

    #[error("Preferred languages cannot contain an empty tag")]
    EmptyLanguageTag,
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .phyloverify/config.yaml (project config)
    /// 3. .phyloverify/local.yaml (project local overrides, optional)
    /// 4. `explicit` file, when given on the command line
    /// 5. Environment variables (PHYLOVERIFY_* prefix, highest priority)
    pub fn load(explicit: Option<&Path>) -> Result<Config> {
        let mut figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".phyloverify/config.yaml"))
            .merge(Yaml::file(".phyloverify/local.yaml"));

        if let Some(path) = explicit {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        let config: Config = figment
            .merge(Env::prefixed("PHYLOVERIFY_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        // Validate logging config
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidRotation(config.logging.rotation.clone()));
        }

        // Validate report config
        if config.report.concurrency == 0 || config.report.concurrency > MAX_CONCURRENCY {
            return Err(ConfigError::InvalidConcurrency(config.report.concurrency));
        }

        if config.report.strip_uri_prefixes.iter().any(String::is_empty) {
            return Err(ConfigError::EmptyUriPrefix);
        }

        if config
            .report
            .preferred_languages
            .iter()
            .any(|lang| lang.trim().is_empty())
        {
            return Err(ConfigError::EmptyLanguageTag);
        }

        Ok(())
    }
}
