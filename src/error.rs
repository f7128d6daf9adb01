//! Error types
//!
//! Every failure is fatal to the calling operation. Nothing here is retried
//! or replaced with a default.

use thiserror::Error;

/// Message carried by [`Error::MissingDependency`] when no summary backend is available.
pub const SUMMARY_MISSING: &str = "summary library not found";

/// Errors raised by the formatter, the recorder seam, and the summary printer
#[derive(Error, Debug)]
pub enum Error {
    /// The summary backend is not available in this build
    #[error("missing dependency: {0}")]
    MissingDependency(String),

    /// Writing the formatted output failed
    #[error("render error: {0}")]
    Render(#[from] std::io::Error),

    /// The recorder rejected a scalar record
    #[error("recorder error: {0}")]
    Recorder(#[from] RecorderError),

    /// The summary backend failed while describing a model
    #[error("summary error: {0}")]
    Summary(String),
}

/// Failure reported by a [`ScalarRecorder`](crate::log::ScalarRecorder) implementation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct RecorderError(pub String);

impl RecorderError {
    /// Create a recorder error from any message
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;
