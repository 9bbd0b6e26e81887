//! Logging initialisation
//!
//! Installs a `tracing-subscriber` fmt layer filtered by `RUST_LOG`, or by the
//! supplied default filter when `RUST_LOG` is unset or does not parse.

use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Invalid log filter '{filter}': {message}")]
    InvalidFilter { filter: String, message: String },

    #[error("Logging initialization failed: {0}")]
    InitError(String),
}

/// Choose the active filter: `env` (the `RUST_LOG` value) wins when it parses
pub fn build_filter(env: Option<&str>, default_filter: &str) -> Result<EnvFilter, TelemetryError> {
    if let Some(filter) = env.and_then(|dirs| EnvFilter::try_new(dirs).ok()) {
        return Ok(filter);
    }

    EnvFilter::try_new(default_filter).map_err(|e| TelemetryError::InvalidFilter {
        filter: default_filter.to_string(),
        message: e.to_string(),
    })
}

/// Install the global subscriber
///
/// Fails if the filter does not parse or a subscriber is already installed.
pub fn init_tracing(default_filter: &str) -> Result<(), TelemetryError> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = build_filter(env.as_deref(), default_filter)?;

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| TelemetryError::InitError(e.to_string()))
}
