//! Environment variable names and the [`LoggerConfig`] built from them.
//!
//! These are purely helpers; [`create_logger`](crate::factory::create_logger)
//! remains decoupled from environment access.

use crate::factory::{create_file_logger, create_logger};
use crate::level::{ParseSeverityError, Severity};
use crate::logger::Logger;
use std::path::PathBuf;

/// Directory that receives the log files.
pub const RETENTION_LOG_DIR_ENV: &str = "RETENTION_LOG_DIR";

/// Number of existing files kept before the oldest is pruned.
pub const RETENTION_LOG_MAX_BACKUPS_ENV: &str = "RETENTION_LOG_MAX_BACKUPS";

/// Minimum severity, e.g. `info` or `warn`.
pub const RETENTION_LOG_LEVEL_ENV: &str = "RETENTION_LOG_LEVEL";

/// `true`/`false`: whether records are also printed to stdout.
pub const RETENTION_LOG_STDOUT_ENV: &str = "RETENTION_LOG_STDOUT";

pub const DEFAULT_DIRECTORY: &str = "./logs";
pub const DEFAULT_MAX_BACKUPS: usize = 5;
pub const DEFAULT_LEVEL: Severity = Severity::Debug;

/// Read an environment variable or fall back to a provided default.
pub fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Error type returned when a configuration value cannot be parsed.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid retention count {value:?}: expected a non-negative integer")]
    InvalidRetention { value: String },

    #[error(transparent)]
    InvalidLevel(#[from] ParseSeverityError),

    #[error("invalid boolean {value:?} for {key}")]
    InvalidBool { key: &'static str, value: String },
}

/// Settings for a logger created through [`LoggerConfig::build`].
///
/// **Fields**
/// - `directory`: where `logs_<timestamp>.log` files are written.
/// - `retention_count`: existing entries tolerated before pruning.
/// - `min_level`: records below this severity are dropped.
/// - `enable_stdout`: if `false`, only the file sink is attached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggerConfig {
    pub directory: PathBuf,
    pub retention_count: usize,
    pub min_level: Severity,
    pub enable_stdout: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_DIRECTORY),
            retention_count: DEFAULT_MAX_BACKUPS,
            min_level: DEFAULT_LEVEL,
            enable_stdout: true,
        }
    }
}

impl LoggerConfig {
    /// Build a config from the `RETENTION_LOG_*` variables, using defaults
    /// for the ones that are unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(RETENTION_LOG_DIR_ENV).filter(|d| !d.is_empty()) {
            config.directory = PathBuf::from(dir);
        }
        if let Some(raw) = lookup(RETENTION_LOG_MAX_BACKUPS_ENV) {
            config.retention_count = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidRetention { value: raw.clone() })?;
        }
        if let Some(raw) = lookup(RETENTION_LOG_LEVEL_ENV) {
            config.min_level = raw.parse()?;
        }
        if let Some(raw) = lookup(RETENTION_LOG_STDOUT_ENV) {
            config.enable_stdout = parse_bool(RETENTION_LOG_STDOUT_ENV, &raw)?;
        }

        Ok(config)
    }

    /// Create the logger described by this config, pruning the directory
    /// as [`create_logger`] does.
    pub fn build(&self) -> Logger {
        if self.enable_stdout {
            create_logger(&self.directory, self.retention_count, self.min_level)
        } else {
            create_file_logger(&self.directory, self.retention_count, self.min_level)
        }
    }
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: raw.to_string(),
        }),
    }
}
