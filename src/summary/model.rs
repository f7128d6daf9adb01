//! Model introspection contract used by summary backends

use crate::error::Result;

/// One layer as reported by a model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerSummary {
    /// Layer type name, e.g. `Linear` or `Conv2d`
    pub layer_type: String,
    /// Output shape without the batch dimension
    pub output_shape: Vec<usize>,
    /// Number of parameters
    pub params: u64,
    /// Whether the parameters are updated during training
    pub trainable: bool,
}

impl LayerSummary {
    /// A trainable layer
    #[must_use]
    pub fn new(layer_type: &str, output_shape: &[usize], params: u64) -> Self {
        Self {
            layer_type: layer_type.to_string(),
            output_shape: output_shape.to_vec(),
            params,
            trainable: true,
        }
    }

    /// Mark the layer as frozen
    #[must_use]
    pub const fn frozen(mut self) -> Self {
        self.trainable = false;
        self
    }
}

/// A model that can describe its layers for a given input shape.
pub trait Summarize {
    /// Layers in forward order for an input of `input_shape` (batch dimension excluded).
    fn layers(&self, input_shape: &[usize]) -> Result<Vec<LayerSummary>>;
}
