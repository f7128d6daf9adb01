//! Progress position and header selection

/// Header for a batch inside a training epoch
pub const BATCH_TEMPLATE: &str = "Epoch [{} / {}], Batch [{} / {}]:";
/// Header for the end of a training epoch
pub const EPOCH_TEMPLATE: &str = "Epoch [{} / {}]:";
/// Header for a validation pass after a single epoch
pub const TEST_TEMPLATE: &str = "Epoch [{}] Test:";
/// Header used when no epoch is known
pub const TESTING_RESULTS: &str = "Testing Results:";

/// Where training currently is.
///
/// Every counter is optional. `epoch` is zero-based and displayed as
/// `epoch + 1`; the other counters are displayed as given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    /// Current epoch index, zero-based
    pub epoch: Option<u64>,
    /// Total number of epochs
    pub epochs: Option<u64>,
    /// Current batch index
    pub batch: Option<u64>,
    /// Total number of batches per epoch
    pub batches: Option<u64>,
}

impl Progress {
    /// A position with no counters set
    #[must_use]
    pub const fn new() -> Self {
        Self {
            epoch: None,
            epochs: None,
            batch: None,
            batches: None,
        }
    }

    /// Set the current (zero-based) epoch
    #[must_use]
    pub const fn epoch(mut self, epoch: u64) -> Self {
        self.epoch = Some(epoch);
        self
    }

    /// Set the total number of epochs
    #[must_use]
    pub const fn epochs(mut self, epochs: u64) -> Self {
        self.epochs = Some(epochs);
        self
    }

    /// Set the current batch index
    #[must_use]
    pub const fn batch(mut self, batch: u64) -> Self {
        self.batch = Some(batch);
        self
    }

    /// Set the total number of batches
    #[must_use]
    pub const fn batches(mut self, batches: u64) -> Self {
        self.batches = Some(batches);
        self
    }

    /// The header line for this position.
    ///
    /// Batch-level when all four counters are known, epoch-level when the
    /// epoch and total are known, a test header for a bare epoch, and
    /// `Testing Results:` otherwise.
    #[must_use]
    pub fn header(&self) -> String {
        let Some(epoch) = self.epoch else {
            return TESTING_RESULTS.to_string();
        };
        let display_epoch = u128::from(epoch) + 1;

        match (self.epochs, self.batch, self.batches) {
            (Some(epochs), Some(batch), Some(batches)) => {
                format!("Epoch [{display_epoch} / {epochs}], Batch [{batch} / {batches}]:")
            }
            (Some(epochs), _, _) => format!("Epoch [{display_epoch} / {epochs}]:"),
            (None, _, _) => format!("Epoch [{display_epoch}] Test:"),
        }
    }

    /// Step at which metrics are forwarded to a recorder, if any.
    ///
    /// A zero epoch or batch counts as absent: epoch 0 and batch 0 never
    /// produce a step. A missing epoch contributes 0 to `batch * (epoch + 1)`.
    #[must_use]
    pub fn recorder_step(&self) -> Option<u64> {
        match (self.epoch, self.batch) {
            (Some(epoch), _) if epoch != 0 => Some(epoch),
            (epoch, Some(batch)) if batch != 0 => Some(batch * (epoch.unwrap_or(0) + 1)),
            _ => None,
        }
    }
}
