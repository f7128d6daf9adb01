//! Scalar recorder seam
//!
//! The formatter forwards each metric to a [`ScalarRecorder`] as a
//! `(name, value, step)` triple. [`ScalarHistory`] is an in-memory
//! implementation that keeps every record it receives.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::RecorderError;

/// A time-series sink for named scalar values.
///
/// The formatter calls `record` from the caller's thread and never shares the
/// recorder. Implementations that are used from several call sites at once
/// must provide their own synchronisation.
pub trait ScalarRecorder {
    /// Record `value` under `name` at training step `step`.
    fn record(&mut self, name: &str, value: f64, step: u64) -> Result<(), RecorderError>;
}

/// One scalar value as received by a recorder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarRecord {
    /// Metric name
    pub name: String,
    /// Metric value
    pub value: f64,
    /// Training step the value belongs to
    pub step: u64,
    /// When the record was received (ISO 8601)
    pub wall_time: DateTime<Utc>,
}

impl ScalarRecord {
    /// Create a record stamped with the current time.
    #[must_use]
    pub fn new(name: &str, value: f64, step: u64) -> Self {
        Self {
            name: name.to_string(),
            value,
            step,
            wall_time: Utc::now(),
        }
    }
}

/// In-memory recorder keeping records in arrival order
#[derive(Debug, Clone, Default)]
pub struct ScalarHistory {
    records: Vec<ScalarRecord>,
}

impl ScalarHistory {
    /// Create an empty history
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// All records, oldest first
    #[must_use]
    pub fn records(&self) -> &[ScalarRecord] {
        &self.records
    }

    /// Records for a single metric name, oldest first
    pub fn series<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ScalarRecord> + 'a {
        self.records.iter().filter(move |r| r.name == name)
    }

    /// Most recent record for a metric name
    #[must_use]
    pub fn latest(&self, name: &str) -> Option<&ScalarRecord> {
        self.records.iter().rev().find(|r| r.name == name)
    }

    /// Number of records held
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop all records
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Serialize the history as JSON Lines, one record per line
    pub fn to_jsonl(&self) -> serde_json::Result<String> {
        let mut out = String::new();
        for record in &self.records {
            out.push_str(&serde_json::to_string(record)?);
            out.push('\n');
        }
        Ok(out)
    }
}

impl ScalarRecorder for ScalarHistory {
    fn record(&mut self, name: &str, value: f64, step: u64) -> Result<(), RecorderError> {
        self.records.push(ScalarRecord::new(name, value, step));
        Ok(())
    }
}
