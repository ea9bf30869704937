//! Error type for configuration and data loading.
//!
//! Rendering, pagination and filtering never fail; only reading config and
//! appointment data from disk can.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by [`crate::config`] and the appointment loaders.
#[derive(Error, Debug)]
pub enum Error {
    /// A file could not be read.
    #[error("failed to read {path:?}: {source}")]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },

    /// Appointment data was not a valid JSON array of appointments.
    #[error("invalid appointment data: {0}")]
    Json(#[from] serde_json::Error),

    /// The config file was not valid TOML or had mistyped keys.
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    /// The config parsed but holds an unusable value.
    #[error("configuration error: {reason}")]
    Config {
        /// What is wrong with it.
        reason: String,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
