//! Progress message formatting
//!
//! Builds a header line for the current [`Progress`] followed by a metric
//! table, optionally forwards every metric to a [`ScalarRecorder`], and
//! either returns the text or prints it.

use std::io::{self, Write};

use colored::Colorize;

use crate::config::FormatConfig;
use crate::error::Result;
use crate::format::metrics::Metrics;
use crate::format::progress::Progress;
use crate::format::table::render_metric_table;
use crate::log::ScalarRecorder;

/// What to do with a composed message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Return the text and print nothing
    Return,
    /// Print the text to stdout and return nothing
    Print,
}

/// Formats progress messages according to a [`FormatConfig`]
#[derive(Debug, Clone, Default)]
pub struct MessageFormatter {
    config: FormatConfig,
}

impl MessageFormatter {
    /// Create a formatter with the given configuration
    #[must_use]
    pub const fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    /// The configuration in use
    #[must_use]
    pub const fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Compose the header and metric table without side effects.
    #[must_use]
    pub fn format(&self, progress: &Progress, metrics: &Metrics) -> String {
        let header = progress.header();
        let header = if self.config.display.color_header {
            header.bold().cyan().to_string()
        } else {
            header
        };

        format!(
            "{header}\n{}",
            render_metric_table(metrics, &self.config.precision)
        )
    }

    /// Forward metrics to the recorder, then return or print the message.
    ///
    /// Metrics are forwarded only when [`Progress::recorder_step`] yields a
    /// step, so epoch 0 and batch 0 are never recorded. The first recorder
    /// failure aborts the call before anything is printed.
    pub fn report(
        &self,
        progress: &Progress,
        metrics: &Metrics,
        recorder: Option<&mut dyn ScalarRecorder>,
        mode: OutputMode,
    ) -> Result<Option<String>> {
        match mode {
            OutputMode::Return => {
                if let Some(recorder) = recorder {
                    forward_metrics(progress, metrics, recorder)?;
                }
                Ok(Some(self.format(progress, metrics)))
            }
            OutputMode::Print => {
                self.write_message(&mut io::stdout().lock(), progress, metrics, recorder)?;
                Ok(None)
            }
        }
    }

    /// Forward metrics to the recorder, then write the message and a newline to `out`.
    pub fn write_message<W: Write>(
        &self,
        out: &mut W,
        progress: &Progress,
        metrics: &Metrics,
        recorder: Option<&mut dyn ScalarRecorder>,
    ) -> Result<()> {
        if let Some(recorder) = recorder {
            forward_metrics(progress, metrics, recorder)?;
        }
        writeln!(out, "{}", self.format(progress, metrics))?;
        Ok(())
    }
}

fn forward_metrics(
    progress: &Progress,
    metrics: &Metrics,
    recorder: &mut dyn ScalarRecorder,
) -> Result<()> {
    let Some(step) = progress.recorder_step() else {
        return Ok(());
    };
    for (name, value) in metrics.iter() {
        recorder.record(name, value, step)?;
    }
    Ok(())
}

/// Compose a message with the default configuration.
#[must_use]
pub fn format_message(progress: &Progress, metrics: &Metrics) -> String {
    MessageFormatter::default().format(progress, metrics)
}

/// Print a message to stdout with the default configuration.
pub fn print_message(progress: &Progress, metrics: &Metrics) -> Result<()> {
    MessageFormatter::default()
        .report(progress, metrics, None, OutputMode::Print)
        .map(|_| ())
}

/// [`MessageFormatter::report`] with the default configuration.
pub fn report(
    progress: &Progress,
    metrics: &Metrics,
    recorder: Option<&mut dyn ScalarRecorder>,
    mode: OutputMode,
) -> Result<Option<String>> {
    MessageFormatter::default().report(progress, metrics, recorder, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::log::ScalarHistory;
    use crate::testutil::{sample_metrics, FailingRecorder};

    #[test]
    fn test_format_epoch_message() {
        let metrics = Metrics::new().with("loss", 0.5);
        let text = format_message(&Progress::new().epoch(2).epochs(10), &metrics);

        let expected = "\
Epoch [3 / 10]:
| Metric   |   Value |
|----------|---------|
| loss     |  0.5000 |";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_format_testing_results_message() {
        let text = format_message(&Progress::new(), &Metrics::new().with("f1", 0.25));
        assert!(text.starts_with("Testing Results:\n| Metric"));
        assert!(text.ends_with("| f1       | 0.250000 |"));
    }

    #[test]
    fn test_format_is_idempotent() {
        let progress = Progress::new().epoch(1).epochs(3).batch(4).batches(8);
        let metrics = sample_metrics();
        assert_eq!(
            format_message(&progress, &metrics),
            format_message(&progress, &metrics)
        );
    }

    #[test]
    fn test_return_mode_returns_text() {
        let progress = Progress::new().epoch(2);
        let metrics = sample_metrics();
        let text = report(&progress, &metrics, None, OutputMode::Return).unwrap();
        assert_eq!(text, Some(format_message(&progress, &metrics)));
    }

    #[test]
    fn test_print_mode_returns_nothing() {
        let result = report(
            &Progress::new(),
            &sample_metrics(),
            None,
            OutputMode::Print,
        )
        .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_print_mode_forwards_to_recorder() {
        let mut history = ScalarHistory::new();
        report(
            &Progress::new().epoch(2).epochs(4),
            &Metrics::new().with("loss", 0.5),
            Some(&mut history),
            OutputMode::Print,
        )
        .unwrap();

        assert_eq!(history.len(), 1);
        assert_eq!(history.records()[0].step, 2);
    }

    #[test]
    fn test_print_mode_recorder_failure_propagates() {
        let mut recorder = FailingRecorder;
        let result = report(
            &Progress::new().epoch(1),
            &sample_metrics(),
            Some(&mut recorder),
            OutputMode::Print,
        );
        assert!(matches!(result, Err(Error::Recorder(_))));
    }

    #[test]
    fn test_written_output_matches_returned_text_plus_newline() {
        let formatter = MessageFormatter::default();
        let progress = Progress::new().epoch(4).epochs(5);
        let metrics = sample_metrics();

        let returned = formatter
            .report(&progress, &metrics, None, OutputMode::Return)
            .unwrap()
            .unwrap();
        let mut printed = Vec::new();
        formatter
            .write_message(&mut printed, &progress, &metrics, None)
            .unwrap();

        assert_eq!(String::from_utf8(printed).unwrap(), format!("{returned}\n"));
    }

    #[test]
    fn test_recorder_receives_metrics_at_epoch_step() {
        let mut history = ScalarHistory::new();
        let metrics = Metrics::new().with("loss", 0.5).with("acc", 90.0);

        report(
            &Progress::new().epoch(3).epochs(10),
            &metrics,
            Some(&mut history),
            OutputMode::Return,
        )
        .unwrap();

        let recorded: Vec<(&str, u64)> = history
            .records()
            .iter()
            .map(|r| (r.name.as_str(), r.step))
            .collect();
        assert_eq!(recorded, vec![("loss", 3), ("acc", 3)]);
    }

    #[test]
    fn test_recorder_uses_batch_step_when_epoch_is_zero() {
        let mut history = ScalarHistory::new();
        report(
            &Progress::new().epoch(0).epochs(2).batch(6).batches(10),
            &Metrics::new().with("loss", 0.5),
            Some(&mut history),
            OutputMode::Return,
        )
        .unwrap();

        assert_eq!(history.len(), 1);
        assert_eq!(history.records()[0].step, 6);
    }

    #[test]
    fn test_epoch_zero_forwards_nothing() {
        let mut history = ScalarHistory::new();
        let text = report(
            &Progress::new().epoch(0).epochs(2),
            &sample_metrics(),
            Some(&mut history),
            OutputMode::Return,
        )
        .unwrap();

        assert!(history.is_empty());
        assert!(text.unwrap().starts_with("Epoch [1 / 2]:"));
    }

    #[test]
    fn test_recorder_failure_propagates() {
        let mut recorder = FailingRecorder;
        let result = report(
            &Progress::new().epoch(1),
            &sample_metrics(),
            Some(&mut recorder),
            OutputMode::Return,
        );
        assert!(matches!(result, Err(Error::Recorder(_))));
    }

    #[test]
    fn test_recorder_failure_skipped_when_nothing_forwarded() {
        let mut recorder = FailingRecorder;
        let result = report(
            &Progress::new().epoch(0),
            &sample_metrics(),
            Some(&mut recorder),
            OutputMode::Return,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_custom_precision_from_config() {
        let config = FormatConfig::parse("[precision]\ndefault = 1\n").unwrap();
        let formatter = MessageFormatter::new(config);
        let text = formatter.format(&Progress::new(), &Metrics::new().with("f1", 0.26));
        assert!(text.ends_with("| f1       |     0.3 |"), "got: {text}");
    }

    #[test]
    fn test_colored_header_keeps_header_text() {
        let config = FormatConfig::parse("[display]\ncolor_header = true\n").unwrap();
        let formatter = MessageFormatter::new(config);
        colored::control::set_override(true);
        let text = formatter.format(&Progress::new().epoch(0), &sample_metrics());
        colored::control::unset_override();

        let header = text.lines().next().unwrap();
        assert!(header.contains("\u{1b}["), "header not coloured: {header:?}");
        assert!(header.contains("Epoch [1] Test:"));
        assert!(text.contains("\n| Metric     |"));
        assert!(!text.lines().skip(1).any(|line| line.contains('\u{1b}')));
    }

    #[test]
    fn test_uncoloured_header_has_no_escape_codes() {
        let text = format_message(&Progress::new().epoch(0), &sample_metrics());
        assert!(text.starts_with("Epoch [1] Test:\n| Metric     |"));
        assert!(!text.contains('\u{1b}'));
    }
}
