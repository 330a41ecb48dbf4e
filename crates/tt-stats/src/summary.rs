//! Derived statistics of one accumulated run.

use std::fmt;

/// Statistics derived from a [`HistogramAccumulator`][crate::HistogramAccumulator].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// Number of samples the statistics are based on.
    pub total: u64,

    /// Exact mean of all samples (not binned).
    pub mean: f64,

    /// Bin position below which slightly less than half the mass lies.
    pub median: f64,

    /// Bin position below which slightly less than 95 % of the mass lies:
    /// the time that guarantees arrival with roughly 95 % confidence.
    pub percentile_95: f64,

    /// Population standard deviation of all samples.
    pub std_dev: f64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Avg: {:.2} Median: {} T(95): {} Deviation: {:.2}",
            self.mean, self.median, self.percentile_95, self.std_dev
        )
    }
}
