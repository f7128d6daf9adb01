//! Progress message formatting
//!
//! Turns a training position and a set of named metrics into a header line
//! and a GitHub-style metric table.

pub mod message;
pub mod metrics;
pub mod progress;
pub mod table;

pub use message::{format_message, print_message, report, MessageFormatter, OutputMode};
pub use metrics::Metrics;
pub use progress::Progress;
pub use table::render_metric_table;
