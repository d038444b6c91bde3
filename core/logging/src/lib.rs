#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Logging utilities for hkid.
//!
//! Libraries emit through `tracing`; binaries call [`init`] once at startup
//! to install a formatting subscriber. `RUST_LOG`, when set, takes
//! precedence over the configured level.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Failure to install the global subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The level string is not a valid filter directive.
    #[error("Invalid log level '{0}': {1}")]
    InvalidLevel(String, String),
    /// A global subscriber was already installed.
    #[error("Failed to install subscriber: {0}")]
    Install(String),
    /// The log file could not be opened for appending.
    #[error("Failed to open log file: {0}")]
    File(#[from] std::io::Error),
}

/// Builds the filter used by [`init`].
///
/// `RUST_LOG` wins when present and valid; otherwise `level` is parsed as a
/// filter directive (`"info"`, `"hkid=debug,warp=warn"`, ...).
pub fn filter(level: &str) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level).map_err(|e| LoggingError::InvalidLevel(level.to_string(), e.to_string()))
}

/// Installs the global fmt subscriber at `level`.
///
/// Output goes to stderr, or is appended to `file` when one is given.
pub fn init(level: &str, file: Option<&Path>) -> Result<(), LoggingError> {
    let builder = tracing_subscriber::fmt().with_env_filter(filter(level)?);
    let installed = match file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };
    installed.map_err(|e| LoggingError::Install(e.to_string()))
}

/// Emits a trace-level event tagged with a module prefix.
pub fn trace(module: &str, msg: &str) {
    tracing::trace!(target: "hkid", module = module, "{}", msg);
}
