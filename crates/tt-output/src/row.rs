//! Plain data row types written by output backends.

use tt_stats::{HistogramAccumulator, Summary};

/// One histogram bin.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramRow<'a> {
    pub scenario:  &'a str,
    pub bin_index: usize,
    /// Centre value of the bin.
    pub bin_value: f64,
    pub count:     u64,
}

impl<'a> HistogramRow<'a> {
    /// One row per bin of `hist`, in bin order.
    pub fn from_histogram(
        scenario: &'a str,
        hist:     &'a HistogramAccumulator,
    ) -> impl Iterator<Item = HistogramRow<'a>> + 'a {
        hist.bins().iter().enumerate().map(move |(i, &count)| HistogramRow {
            scenario,
            bin_index: i,
            bin_value: hist.bin_value(i),
            count,
        })
    }
}

/// Derived statistics of one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow<'a> {
    pub scenario: &'a str,
    pub trials:   u64,
    pub mean:     f64,
    pub median:   f64,
    pub p95:      f64,
    pub std_dev:  f64,
}

impl<'a> SummaryRow<'a> {
    pub fn new(scenario: &'a str, summary: &Summary) -> Self {
        Self {
            scenario,
            trials:  summary.total,
            mean:    summary.mean,
            median:  summary.median,
            p95:     summary.percentile_95,
            std_dev: summary.std_dev,
        }
    }
}
