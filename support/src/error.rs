//! Error types for configuration handling.

use thiserror::Error;

use std::io;

/// Errors that can occur while setting up a run.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration source could not be read.
    #[error("reading configuration: {0}")]
    Io(#[from] io::Error),

    /// The configuration is not valid JSON for a `Config`.
    #[error("parsing configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration parsed but describes an unusable controller.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The control period must be a positive, finite number of seconds.
    #[error("invalid control period: {0}")]
    InvalidPeriod(f64),
}
