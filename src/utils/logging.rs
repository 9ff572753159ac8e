//! Logging configuration and subscriber setup
//!
//! Priority for the log level:
//! 1. `--log-level` CLI flag
//! 2. `VODSLICE_LOG` environment variable (any `EnvFilter` directive)
//! 3. `info`
//!
//! Logs always go to stderr so the preview lines and the external tool's
//! output own the terminal's stdout.

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Environment variable consulted when no level flag is given
pub const LOG_ENV_VAR: &str = "VODSLICE_LOG";

/// Log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// General information
    Info,
    /// Debug information
    Debug,
    /// Very verbose debug information
    Trace,
}

impl LogLevel {
    fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text format
    #[default]
    Pretty,
    /// Compact text format
    Compact,
    /// JSON format for structured logging
    Json,
}

/// Logging configuration options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Explicit level; falls back to the environment, then `info`
    pub level: Option<LogLevel>,
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: Option<LogLevel>, format: LogFormat) -> Self {
        Self { level, format }
    }

    /// Filter directive the subscriber will use
    pub fn filter_directive(&self, env_value: Option<&str>) -> String {
        match (self.level, env_value) {
            (Some(level), _) => level.as_directive().to_string(),
            (None, Some(env)) if !env.trim().is_empty() => env.trim().to_string(),
            _ => LogLevel::Info.as_directive().to_string(),
        }
    }

    /// Install the global subscriber.
    ///
    /// Fails if a subscriber is already installed or the environment
    /// directive does not parse.
    pub fn initialize(&self) -> Result<()> {
        let env_value = std::env::var(LOG_ENV_VAR).ok();
        let filter = EnvFilter::try_new(self.filter_directive(env_value.as_deref()))?;

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false);

        match self.format {
            LogFormat::Pretty => builder.try_init(),
            LogFormat::Compact => builder.compact().try_init(),
            LogFormat::Json => builder.json().try_init(),
        }
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {}", e))?;

        tracing::debug!(format = ?self.format, "logging initialized");
        Ok(())
    }
}
