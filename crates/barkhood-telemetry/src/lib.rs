#![forbid(unsafe_code)]
#![deny(unused_must_use, rustdoc::broken_intra_doc_links, rustdoc::bare_urls)]
#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
//! Logging setup for Barkhood's native entry points.
//!
//! # Design
//! - One entry point installs the global `tracing` subscriber.
//! - `RUST_LOG` wins over the configured level when present.
//! - The application version is recorded once and attached to the startup event.

use anyhow::{Result, anyhow};
use once_cell::sync::OnceCell;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is not provided.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Environment variable selecting the output format.
pub const ENV_LOG_FORMAT: &str = "BARKHOOD_LOG_FORMAT";

static APP_VERSION: OnceCell<String> = OnceCell::new();

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig<'a> {
    /// Filter directive used when `RUST_LOG` is unset (e.g. `info`, `barkhood_ai=debug`).
    pub level: &'a str,
    /// Output format.
    pub format: LogFormat,
    /// Version string recorded with the startup event.
    pub app_version: &'a str,
}

impl Default for LoggingConfig<'_> {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL,
            format: LogFormat::infer(),
            app_version: app_version(),
        }
    }
}

/// Output formats for the subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event.
    Json,
    /// Human-readable lines.
    Pretty,
}

impl LogFormat {
    /// Pretty in debug builds, JSON in release builds.
    #[must_use]
    pub const fn infer() -> Self {
        if cfg!(debug_assertions) {
            Self::Pretty
        } else {
            Self::Json
        }
    }

    /// Parse a format name; unknown names fall back to [`LogFormat::infer`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::infer(),
        }
    }
}

/// Read the format from [`ENV_LOG_FORMAT`], if set.
#[must_use]
pub fn log_format_from_env() -> Option<LogFormat> {
    log_format_from_value(std::env::var(ENV_LOG_FORMAT).ok().as_deref())
}

fn log_format_from_value(value: Option<&str>) -> Option<LogFormat> {
    value
        .filter(|value| !value.trim().is_empty())
        .map(LogFormat::parse)
}

/// Version recorded during initialisation, or `dev` before that.
#[must_use]
pub fn app_version() -> &'static str {
    APP_VERSION.get().map_or("dev", String::as_str)
}

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let _ = APP_VERSION.set(config.app_version.to_string());

    let filter = build_env_filter(config.level);
    let installed = match config.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_target(false).with_thread_ids(false))
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_thread_ids(false))
            .try_init(),
    };
    installed.map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))?;

    tracing::debug!(version = app_version(), format = ?config.format, "logging initialised");
    Ok(())
}

fn build_env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}
