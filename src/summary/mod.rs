//! Model summary printing
//!
//! A [`SummaryPrinter`] delegates to a [`SummaryBackend`]. Whether a backend
//! exists is decided once, up front, and carried as a [`Capability`]: a
//! printer without one fails every call with
//! [`Error::MissingDependency`] and writes nothing.

#[cfg(feature = "layer-table")]
pub mod layer_table;
pub mod model;

use std::io::{self, Write};

use crate::error::{Error, Result, SUMMARY_MISSING};

#[cfg(feature = "layer-table")]
pub use layer_table::LayerTable;
pub use model::{LayerSummary, Summarize};

/// Prints a layer-by-layer description of a model
pub trait SummaryBackend<M: ?Sized> {
    /// Write the summary of `model` for an input of `input_shape` to `out`.
    fn summarize(&self, model: &M, input_shape: &[usize], out: &mut dyn Write) -> Result<()>;
}

/// Backend type used in builds without a summary backend. It has no values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unavailable {}

impl<M: ?Sized> SummaryBackend<M> for Unavailable {
    fn summarize(&self, _model: &M, _input_shape: &[usize], _out: &mut dyn Write) -> Result<()> {
        match *self {}
    }
}

/// Backend selected by [`SummaryPrinter::detect`]
#[cfg(feature = "layer-table")]
pub type DefaultBackend = LayerTable;
/// Backend selected by [`SummaryPrinter::detect`]
#[cfg(not(feature = "layer-table"))]
pub type DefaultBackend = Unavailable;

/// Whether a summary backend is available
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// A backend is present and calls are delegated to it
    Available,
    /// No backend; calls fail with [`Error::MissingDependency`]
    Missing,
}

impl Capability {
    /// Availability of the built-in backend in this build
    #[must_use]
    pub const fn detect() -> Self {
        if cfg!(feature = "layer-table") {
            Self::Available
        } else {
            Self::Missing
        }
    }
}

/// Delegates model summaries to an optional backend
#[derive(Debug, Clone)]
pub struct SummaryPrinter<B> {
    backend: Option<B>,
}

impl<B> SummaryPrinter<B> {
    /// A printer that delegates to `backend`
    pub const fn with_backend(backend: B) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// A printer with no backend
    #[must_use]
    pub const fn missing() -> Self {
        Self { backend: None }
    }

    /// Whether this printer has a backend
    #[must_use]
    pub const fn capability(&self) -> Capability {
        if self.backend.is_some() {
            Capability::Available
        } else {
            Capability::Missing
        }
    }

    fn backend(&self) -> Result<&B> {
        self.backend
            .as_ref()
            .ok_or_else(|| Error::MissingDependency(SUMMARY_MISSING.to_string()))
    }

    /// Write the summary to `out`, passing model and shape through unchanged.
    pub fn write_summary<M, W>(&self, out: &mut W, model: &M, input_shape: &[usize]) -> Result<()>
    where
        M: ?Sized,
        B: SummaryBackend<M>,
        W: Write,
    {
        self.backend()?.summarize(model, input_shape, out)
    }

    /// Print the summary to stdout.
    pub fn print_summary<M>(&self, model: &M, input_shape: &[usize]) -> Result<()>
    where
        M: ?Sized,
        B: SummaryBackend<M>,
    {
        let backend = self.backend()?;
        let stdout = io::stdout();
        let mut out = stdout.lock();
        backend.summarize(model, input_shape, &mut out)?;
        out.flush()?;
        Ok(())
    }
}

impl SummaryPrinter<DefaultBackend> {
    /// A printer backed by the built-in backend when this build has one.
    #[must_use]
    pub fn detect() -> Self {
        match Capability::detect() {
            Capability::Available => default_printer(),
            Capability::Missing => Self::missing(),
        }
    }
}

#[cfg(feature = "layer-table")]
const fn default_printer() -> SummaryPrinter<DefaultBackend> {
    SummaryPrinter::with_backend(LayerTable)
}

#[cfg(not(feature = "layer-table"))]
const fn default_printer() -> SummaryPrinter<DefaultBackend> {
    SummaryPrinter::missing()
}

/// Print a summary of `model` with the backend detected for this build.
pub fn print_summary<M: ?Sized>(model: &M, input_shape: &[usize]) -> Result<()>
where
    DefaultBackend: SummaryBackend<M>,
{
    SummaryPrinter::detect().print_summary(model, input_shape)
}
