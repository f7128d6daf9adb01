//! Trainlog - training progress messages
//!
//! Formats epoch and batch progress with a table of metric values, forwards
//! the metrics to an optional scalar recorder, and prints layer-by-layer
//! model summaries through an optional backend.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod format;
pub mod log;
pub mod summary;

#[cfg(test)]
mod testutil;

// Re-export commonly used types
pub use config::{FormatConfig, PrecisionConfig, PrecisionRule};
pub use error::{Error, RecorderError, Result};
pub use format::{
    format_message, print_message, report, MessageFormatter, Metrics, OutputMode, Progress,
};
pub use log::{ScalarHistory, ScalarRecord, ScalarRecorder};
pub use summary::{
    print_summary, Capability, LayerSummary, Summarize, SummaryBackend, SummaryPrinter,
};
