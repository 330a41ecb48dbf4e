//! The `OutputWriter` trait implemented by backend writers.

use tt_stats::{HistogramAccumulator, Summary};

use crate::OutputResult;

/// Sink for the results of one or more named scenarios.
pub trait OutputWriter {
    /// Write every bin of `hist`, tagged with `scenario`.
    fn write_histogram(&mut self, scenario: &str, hist: &HistogramAccumulator) -> OutputResult<()>;

    /// Write one summary row for `scenario`.
    fn write_summary(&mut self, scenario: &str, summary: &Summary) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
