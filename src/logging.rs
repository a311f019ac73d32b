//! Logging initialization for the command line front end.
//!
//! The library itself only emits through `tracing`; installing a subscriber
//! is left to the binary.

use std::io;

use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogConfig;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log filter {0:?}: {1}")]
    InvalidFilter(String, String),

    #[error("Failed to install logger: {0}")]
    Init(String),
}

/// Build the filter: `RUST_LOG` wins over the configured level.
pub fn filter(config: &LogConfig) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(&config.level)
            .map_err(|e| LoggingError::InvalidFilter(config.level.clone(), e.to_string()))
    })
}

/// Install a global subscriber writing to stderr.
pub fn init(config: &LogConfig) -> Result<(), LoggingError> {
    let filter = filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.json {
        registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().without_time().with_writer(io::stderr))
            .try_init()
    };
    result.map_err(|e| LoggingError::Init(e.to_string()))
}
