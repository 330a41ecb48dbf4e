//! Run observer trait for progress reporting.

use tt_stats::HistogramAccumulator;

use crate::RunReport;

/// Callbacks invoked by [`TravelSimulator::run_seeded`][crate::TravelSimulator::run_seeded].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Progress is reported per trial block, never
/// in the middle of one.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl RunObserver for Progress {
///     fn on_block_end(&mut self, block: usize, trials_done: u64) {
///         eprintln!("block {block}: {trials_done} trials");
///     }
/// }
/// ```
pub trait RunObserver {
    /// Called once before any trial runs.
    fn on_run_start(&mut self, _trial_count: u64, _blocks: usize) {}

    /// Called after block `block` has been folded into the sink.
    fn on_block_end(&mut self, _block: usize, _trials_done: u64) {}

    /// Called once after the last block, with the filled sink.
    fn on_run_end(&mut self, _report: &RunReport, _sink: &HistogramAccumulator) {}
}

/// A [`RunObserver`] that does nothing.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}
