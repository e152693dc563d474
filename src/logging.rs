//! Tracing subscriber setup.
//!
//! Logs go to stderr so command output on stdout stays clean for scripts.
//! `RUST_LOG` overrides the configured level.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Errors raised while installing the subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Invalid log level '{level}': {source}")]
    InvalidLevel {
        level: String,
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Invalid RUST_LOG '{directives}': {source}")]
    InvalidEnvFilter {
        directives: String,
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing_subscriber::util::TryInitError),
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    if INITIALIZED.get().is_some() {
        return Ok(());
    }

    let env_directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(&config.level, env_directives.as_deref())?;
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Human => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .try_init()?,
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init()?,
    }

    let _ = INITIALIZED.set(());
    Ok(())
}

/// `RUST_LOG` directives win over the configured level when non-empty.
fn build_filter(level: &str, env_directives: Option<&str>) -> Result<EnvFilter, LoggingError> {
    if let Some(directives) = env_directives.filter(|d| !d.trim().is_empty()) {
        return EnvFilter::try_new(directives).map_err(|source| LoggingError::InvalidEnvFilter {
            directives: directives.to_string(),
            source,
        });
    }
    EnvFilter::try_new(level).map_err(|source| LoggingError::InvalidLevel {
        level: level.to_string(),
        source,
    })
}
