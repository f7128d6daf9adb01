//! GitHub-style pipe table for metric values
//!
//! Layout rules:
//! - every cell has one space of padding on each side
//! - a column is at least its header width plus two
//! - names are left-aligned, values are aligned on the decimal point and
//!   right-aligned, and the `Value` header is right-aligned
//! - with no rows, both headers are left-aligned

use crate::config::PrecisionConfig;
use crate::format::metrics::Metrics;

/// Header of the name column
pub const METRIC_HEADER: &str = "Metric";
/// Header of the value column
pub const VALUE_HEADER: &str = "Value";

const MIN_PADDING: usize = 2;

/// Format a value with a fixed number of decimals.
///
/// Non-finite values are spelled `nan`, `inf` and `-inf`.
#[must_use]
pub fn format_value(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        let text = if value.is_sign_positive() { "inf" } else { "-inf" };
        text.to_string()
    } else {
        format!("{value:.decimals$}")
    }
}

/// Digits after the decimal point, or `None` for integral or non-finite text
fn digits_after_point(value: f64, decimals: usize) -> Option<usize> {
    (value.is_finite() && decimals > 0).then_some(decimals)
}

fn width(s: &str) -> usize {
    s.chars().count()
}

fn pad_left(s: &str, to: usize) -> String {
    format!("{}{s}", " ".repeat(to.saturating_sub(width(s))))
}

fn pad_right(s: &str, to: usize) -> String {
    format!("{s}{}", " ".repeat(to.saturating_sub(width(s))))
}

/// Render metrics as a two-column table, one row per metric in insertion order.
#[must_use]
pub fn render_metric_table(metrics: &Metrics, precision: &PrecisionConfig) -> String {
    let min_name = width(METRIC_HEADER) + MIN_PADDING;
    let min_value = width(VALUE_HEADER) + MIN_PADDING;

    if metrics.is_empty() {
        return [
            format!(
                "| {} | {} |",
                pad_right(METRIC_HEADER, min_name),
                pad_right(VALUE_HEADER, min_value)
            ),
            rule_row(min_name, min_value),
        ]
        .join("\n");
    }

    let names: Vec<&str> = metrics.iter().map(|(name, _)| name.trim()).collect();

    let values: Vec<(String, Option<usize>)> = metrics
        .iter()
        .map(|(name, value)| {
            let decimals = precision.decimals_for(name);
            (
                format_value(value, decimals),
                digits_after_point(value, decimals),
            )
        })
        .collect();

    // Right-pad so decimal points line up; integral cells sit one column
    // further left than a point would.
    let max_after = values
        .iter()
        .map(|(_, after)| after.map_or(0, |d| d + 1))
        .max()
        .unwrap_or(0);
    let aligned: Vec<String> = values
        .iter()
        .map(|(text, after)| {
            let used = after.map_or(0, |d| d + 1);
            format!("{text}{}", " ".repeat(max_after - used))
        })
        .collect();

    let name_width = names.iter().map(|n| width(n)).fold(min_name, usize::max);
    let value_width = aligned.iter().map(|v| width(v)).fold(min_value, usize::max);

    let mut lines = Vec::with_capacity(names.len() + 2);
    lines.push(format!(
        "| {} | {} |",
        pad_right(METRIC_HEADER, name_width),
        pad_left(VALUE_HEADER, value_width)
    ));
    lines.push(rule_row(name_width, value_width));
    for (name, value) in names.iter().zip(&aligned) {
        lines.push(format!(
            "| {} | {} |",
            pad_right(name, name_width),
            pad_left(value, value_width)
        ));
    }

    lines.join("\n")
}

fn rule_row(name_width: usize, value_width: usize) -> String {
    format!(
        "|{}|{}|",
        "-".repeat(name_width + 2),
        "-".repeat(value_width + 2)
    )
}
