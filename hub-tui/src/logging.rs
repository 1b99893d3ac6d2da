//! Tracing subscriber setup.
//!
//! The terminal is in raw mode on the alternate screen, so events go to a
//! log file instead of stdout. `RUST_LOG` overrides the configured level.

use crate::config::LoggingConfig;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to open log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    #[error("Tracing subscriber already installed: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    if let Some(parent) = config.path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.path)?;

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)?,
    };

    let registry = tracing_subscriber::registry().with(env_filter);
    if config.json {
        registry
            .with(fmt::layer().json().with_ansi(false).with_writer(Mutex::new(file)))
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .try_init()?;
    }
    Ok(())
}
