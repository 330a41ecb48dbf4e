//! Fixed-bin online histogram with running moments.

use std::fmt;

use crate::{StatsError, StatsResult, Summary};

/// Upper bound on the number of bins a single accumulator may allocate.
const MAX_BINS: usize = 1 << 24;

/// Online histogram over `[min_value, max_value]` at `bin_width` resolution.
///
/// Bin `i` is centred on `min_value + i * bin_width`; a value goes to the bin
/// whose centre is nearest.  Values outside the range saturate into the first
/// or last bin instead of being dropped, so `bins().iter().sum() == total()`
/// always holds.
///
/// Alongside the bins the accumulator keeps the exact running `sum` and
/// `sum_of_squares` of every value added (clamped or not), so the mean and
/// standard deviation are not affected by binning.
///
/// Single-writer: [`add`](Self::add) takes `&mut self`.  To accumulate from
/// several threads give each its own [`empty_like`](Self::empty_like) partial
/// and [`merge`](Self::merge) them afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct HistogramAccumulator {
    min_value:      f64,
    max_value:      f64,
    bin_width:      f64,
    bins:           Vec<u64>,
    total:          u64,
    sum:            f64,
    sum_of_squares: f64,
}

impl HistogramAccumulator {
    /// Create an accumulator over `[min_value, max_value]`.
    pub fn new(min_value: f64, max_value: f64, bin_width: f64) -> StatsResult<Self> {
        let mut hist = Self {
            min_value,
            max_value,
            bin_width,
            bins:           Vec::new(),
            total:          0,
            sum:            0.0,
            sum_of_squares: 0.0,
        };
        hist.configure(min_value, max_value, bin_width)?;
        Ok(hist)
    }

    /// (Re)configure the range and discard all accumulated data.
    ///
    /// Bin count is `floor((max - min) / bin_width) + 1`.  On error the
    /// accumulator is left untouched.
    pub fn configure(&mut self, min_value: f64, max_value: f64, bin_width: f64) -> StatsResult<()> {
        if !bin_width.is_finite() || bin_width <= 0.0 {
            return Err(StatsError::InvalidBinWidth(bin_width));
        }
        if !min_value.is_finite() || !max_value.is_finite() || max_value < min_value {
            return Err(StatsError::InvalidRange { min: min_value, max: max_value });
        }
        let steps = ((max_value - min_value) / bin_width).floor();
        if steps >= MAX_BINS as f64 {
            return Err(StatsError::TooManyBins { bins: steps + 1.0, max: MAX_BINS });
        }

        self.min_value = min_value;
        self.max_value = max_value;
        self.bin_width = bin_width;
        self.bins.clear();
        self.bins.resize(steps as usize + 1, 0);
        self.total = 0;
        self.sum = 0.0;
        self.sum_of_squares = 0.0;
        Ok(())
    }

    /// Discard all data, keeping the current range.
    pub fn reset(&mut self) {
        self.bins.fill(0);
        self.total = 0;
        self.sum = 0.0;
        self.sum_of_squares = 0.0;
    }

    /// A fresh accumulator with the same range and bin width.
    pub fn empty_like(&self) -> Self {
        Self {
            min_value:      self.min_value,
            max_value:      self.max_value,
            bin_width:      self.bin_width,
            bins:           vec![0; self.bins.len()],
            total:          0,
            sum:            0.0,
            sum_of_squares: 0.0,
        }
    }

    /// Record one value.  Never fails: out-of-range values land in the edge
    /// bins.
    #[inline]
    pub fn add(&mut self, value: f64) {
        let idx = self.bin_index(value);
        self.bins[idx] += 1;
        self.total += 1;
        self.sum += value;
        self.sum_of_squares += value * value;
    }

    /// Index of the bin `value` would be counted in.
    #[inline]
    pub fn bin_index(&self, value: f64) -> usize {
        let last = self.bins.len() - 1;
        let pos = ((value - self.min_value) / self.bin_width).round();
        // `as usize` saturates: NaN → 0, +∞ → usize::MAX.
        if pos <= 0.0 { 0 } else { (pos as usize).min(last) }
    }

    /// Fold `other` into `self`.  Both must share range and bin width.
    pub fn merge(&mut self, other: &HistogramAccumulator) -> StatsResult<()> {
        if !self.same_bins(other) {
            return Err(StatsError::IncompatibleBins {
                left:  self.describe_bins(),
                right: other.describe_bins(),
            });
        }
        for (mine, theirs) in self.bins.iter_mut().zip(&other.bins) {
            *mine += theirs;
        }
        self.total += other.total;
        self.sum += other.sum;
        self.sum_of_squares += other.sum_of_squares;
        Ok(())
    }

    /// Derive mean, median, 95th percentile, and standard deviation.
    ///
    /// The median and percentile are bin positions: the last bin at which the
    /// running count is still below `0.5 * total` (resp. `0.95 * total`),
    /// reported as `min_value + index * bin_width`.  This sits slightly below
    /// the true quantile.
    pub fn summarize(&self) -> StatsResult<Summary> {
        if self.total == 0 {
            return Err(StatsError::NoSamples);
        }
        let n = self.total as f64;
        let [median, p95] = self.scan([0.5 * n, 0.95 * n]);

        let mean = self.sum / n;
        let variance = (self.sum_of_squares / n - mean * mean).max(0.0);

        Ok(Summary {
            total:         self.total,
            mean,
            median:        self.bin_value(median),
            percentile_95: self.bin_value(p95),
            std_dev:       variance.sqrt(),
        })
    }

    /// The same bin-scan used by [`summarize`](Self::summarize) for any
    /// quantile `q` in `(0, 1]`.
    pub fn percentile_point(&self, q: f64) -> StatsResult<f64> {
        if !(q > 0.0 && q <= 1.0) {
            return Err(StatsError::InvalidQuantile(q));
        }
        if self.total == 0 {
            return Err(StatsError::NoSamples);
        }
        let [idx] = self.scan([q * self.total as f64]);
        Ok(self.bin_value(idx))
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn bins(&self) -> &[u64] {
        &self.bins
    }

    #[inline]
    pub fn bin_count(&self) -> usize {
        self.bins.len()
    }

    /// Centre value of bin `index`.
    #[inline]
    pub fn bin_value(&self, index: usize) -> f64 {
        self.min_value + index as f64 * self.bin_width
    }

    /// Largest single-bin count (0 when empty).
    pub fn max_bin(&self) -> u64 {
        self.bins.iter().copied().max().unwrap_or(0)
    }

    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    #[inline]
    pub fn sum(&self) -> f64 {
        self.sum
    }

    #[inline]
    pub fn sum_of_squares(&self) -> f64 {
        self.sum_of_squares
    }

    #[inline]
    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    #[inline]
    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    #[inline]
    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    /// Single pass over the bins.  For each threshold, returns the last index
    /// whose inclusive running count is `< threshold` (0 if none).
    fn scan<const N: usize>(&self, thresholds: [f64; N]) -> [usize; N] {
        let mut found = [0usize; N];
        let mut running = 0u64;
        for (i, &count) in self.bins.iter().enumerate() {
            running += count;
            let r = running as f64;
            for (slot, &threshold) in found.iter_mut().zip(&thresholds) {
                if r < threshold {
                    *slot = i;
                }
            }
        }
        found
    }

    fn same_bins(&self, other: &HistogramAccumulator) -> bool {
        self.min_value == other.min_value
            && self.max_value == other.max_value
            && self.bin_width == other.bin_width
            && self.bins.len() == other.bins.len()
    }

    fn describe_bins(&self) -> String {
        format!(
            "[{}, {}] step {} ({} bins)",
            self.min_value,
            self.max_value,
            self.bin_width,
            self.bins.len()
        )
    }
}

impl fmt::Display for HistogramAccumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} samples over {}", self.total, self.describe_bins())
    }
}
