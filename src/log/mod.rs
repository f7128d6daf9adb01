//! Metric recording
//!
//! This module provides the recorder seam the formatter forwards scalar
//! metrics through, plus an in-memory recorder.

pub mod recorder;

pub use recorder::{ScalarHistory, ScalarRecord, ScalarRecorder};
