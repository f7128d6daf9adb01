//! Layer table summary backend
//!
//! Renders a layer-by-layer table in the familiar torchsummary layout:
//! one row per layer with its output shape and parameter count, followed by
//! total, trainable and non-trainable parameter counts.

use std::io::Write;

use crate::error::Result;
use crate::summary::model::{LayerSummary, Summarize};
use crate::summary::SummaryBackend;

const RULE_WIDTH: usize = 64;

/// Built-in backend for any model implementing [`Summarize`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayerTable;

impl<M: Summarize + ?Sized> SummaryBackend<M> for LayerTable {
    fn summarize(&self, model: &M, input_shape: &[usize], out: &mut dyn Write) -> Result<()> {
        let layers = model.layers(input_shape)?;
        out.write_all(render_layer_table(&layers).as_bytes())?;
        Ok(())
    }
}

/// Render the full summary table, one line per row, with a trailing newline.
#[must_use]
pub fn render_layer_table(layers: &[LayerSummary]) -> String {
    let mut output = String::new();
    let thin = "-".repeat(RULE_WIDTH);
    let thick = "=".repeat(RULE_WIDTH);

    output.push_str(&thin);
    output.push('\n');
    output.push_str(&row("Layer (type)", "Output Shape", "Param #"));
    output.push_str(&thick);
    output.push('\n');

    for (i, layer) in layers.iter().enumerate() {
        output.push_str(&row(
            &format!("{}-{}", layer.layer_type, i + 1),
            &format_shape(&layer.output_shape),
            &format_count(layer.params),
        ));
    }

    let total: u64 = layers.iter().map(|l| l.params).sum();
    let trainable: u64 = layers.iter().filter(|l| l.trainable).map(|l| l.params).sum();

    output.push_str(&thick);
    output.push('\n');
    output.push_str(&format!("Total params: {}\n", format_count(total)));
    output.push_str(&format!("Trainable params: {}\n", format_count(trainable)));
    output.push_str(&format!(
        "Non-trainable params: {}\n",
        format_count(total - trainable)
    ));
    output.push_str(&thin);
    output.push('\n');

    output
}

fn row(name: &str, shape: &str, params: &str) -> String {
    format!("{name:>20}  {shape:>25} {params:>15}\n")
}

/// Shape with a leading `-1` for the batch dimension, e.g. `[-1, 64, 32, 32]`
fn format_shape(shape: &[usize]) -> String {
    let dims: Vec<String> = std::iter::once("-1".to_string())
        .chain(shape.iter().map(ToString::to_string))
        .collect();
    format!("[{}]", dims.join(", "))
}

/// Format a count with comma thousands separators
fn format_count(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
