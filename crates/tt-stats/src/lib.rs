//! `tt-stats` — streaming histogram for the rust_tt travel-time simulator.
//!
//! [`HistogramAccumulator`] is a two-pass design:
//!
//! ```text
//! pass 1  add(value) × N      — O(1) per sample: bin++, total++, sum, sum²
//! pass 2  summarize()         — one linear scan over the bins finds the
//!                               median and 95th-percentile crossings together
//! ```
//!
//! Accumulators are single-writer.  Parallel producers fill one partial each
//! (see [`HistogramAccumulator::empty_like`]) and fold them together with
//! [`HistogramAccumulator::merge`].

pub mod error;
pub mod histogram;
pub mod summary;

#[cfg(test)]
mod tests;

pub use error::{StatsError, StatsResult};
pub use histogram::HistogramAccumulator;
pub use summary::Summary;
