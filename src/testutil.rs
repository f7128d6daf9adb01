//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use crate::error::{Error, RecorderError, Result};
use crate::format::Metrics;
use crate::log::ScalarRecorder;
use crate::summary::{LayerSummary, Summarize, SummaryBackend};

/// A metric set touching every precision class.
#[must_use]
pub fn sample_metrics() -> Metrics {
    Metrics::new()
        .with("train_loss", 0.348_172)
        .with("accuracy", 91.254)
        .with("f1", 0.812_345_6)
}

/// Recorder that rejects every record.
pub struct FailingRecorder;

impl ScalarRecorder for FailingRecorder {
    fn record(&mut self, name: &str, _value: f64, _step: u64) -> std::result::Result<(), RecorderError> {
        Err(RecorderError::new(format!("cannot record '{name}'")))
    }
}

/// Two-layer perceptron that only accepts a flat input of its input width.
pub struct TinyMlp {
    input: usize,
    hidden: usize,
    output: usize,
}

impl TinyMlp {
    #[must_use]
    pub const fn new(input: usize, hidden: usize, output: usize) -> Self {
        Self {
            input,
            hidden,
            output,
        }
    }
}

impl Summarize for TinyMlp {
    fn layers(&self, input_shape: &[usize]) -> Result<Vec<LayerSummary>> {
        if input_shape != [self.input] {
            return Err(Error::Summary(format!(
                "expected input shape [{}], got {input_shape:?}",
                self.input
            )));
        }
        let linear = |i: usize, o: usize| (i * o + o) as u64;
        Ok(vec![
            LayerSummary::new("Linear", &[self.hidden], linear(self.input, self.hidden)),
            LayerSummary::new("ReLU", &[self.hidden], 0),
            LayerSummary::new("Linear", &[self.output], linear(self.hidden, self.output)),
        ])
    }
}

/// Backend that remembers the shapes it was called with.
#[derive(Clone, Default)]
pub struct RecordingBackend {
    calls: Rc<RefCell<Vec<Vec<usize>>>>,
    fail: bool,
}

impl RecordingBackend {
    /// A backend whose every call fails with a summary error
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Input shapes received so far
    #[must_use]
    pub fn calls(&self) -> Vec<Vec<usize>> {
        self.calls.borrow().clone()
    }
}

impl<M: ?Sized> SummaryBackend<M> for RecordingBackend {
    fn summarize(&self, _model: &M, input_shape: &[usize], out: &mut dyn Write) -> Result<()> {
        self.calls.borrow_mut().push(input_shape.to_vec());
        if self.fail {
            return Err(Error::Summary("backend exploded".to_string()));
        }
        writeln!(out, "summary of {input_shape:?}")?;
        Ok(())
    }
}
