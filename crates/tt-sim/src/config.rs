//! Run configuration and histogram range policy.

use tt_core::SimulationParameters;

use crate::{SimError, SimResult};

// ── RangePolicy ───────────────────────────────────────────────────────────────

/// How the accumulator's value range is derived from the network parameters.
///
/// ```text
/// min = travel_time - lower_margin
/// max = travel_time
///     + punctuality × punctuality_factor
///     + departure_interval × (interval_base + interval_direct_factor × direct_ratio)
/// ```
///
/// The defaults reproduce the reference sizing (delay width × 5, interval ×
/// 3 … 11 depending on the direct ratio, 1-unit bins).  For networks where
/// most endpoints are directly connected the direct-route wait can reach
/// `interval × directs`; raise `interval_direct_factor` there if the last bin
/// collects noticeable clamped mass.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RangePolicy {
    /// Space kept below the nominal travel time.
    pub lower_margin: f64,

    /// Multiples of the delay width kept above the travel time.
    pub punctuality_factor: f64,

    /// Multiples of the departure interval always kept above the travel time.
    pub interval_base: f64,

    /// Additional interval multiples, scaled by the direct ratio (direct
    /// routes wait up to `interval × directs`).
    pub interval_direct_factor: f64,

    /// Histogram resolution.
    pub bin_width: f64,
}

impl Default for RangePolicy {
    fn default() -> Self {
        Self {
            lower_margin:           3.0,
            punctuality_factor:     5.0,
            interval_base:          3.0,
            interval_direct_factor: 8.0,
            bin_width:              1.0,
        }
    }
}

impl RangePolicy {
    /// All factors must be finite and non-negative (bin width is checked by
    /// the histogram itself).
    pub fn validate(&self) -> SimResult<()> {
        let factors = [
            ("lower_margin", self.lower_margin),
            ("punctuality_factor", self.punctuality_factor),
            ("interval_base", self.interval_base),
            ("interval_direct_factor", self.interval_direct_factor),
        ];
        for (name, value) in factors {
            if !value.is_finite() || value < 0.0 {
                return Err(SimError::Config(format!(
                    "range policy {name} must be finite and >= 0, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// `(min, max)` of the accumulator range for `params`.
    pub fn range_for(&self, params: &SimulationParameters) -> (f64, f64) {
        let min = params.travel_time - self.lower_margin;
        let max = params.travel_time
            + params.punctuality * self.punctuality_factor
            + params.departure_interval
                * (self.interval_base + self.interval_direct_factor * params.direct_ratio());
        (min, max)
    }
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Settings for a seeded run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RunConfig {
    /// Number of synthetic travellers.  Must be > 0.
    pub trial_count: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    /// Ignored without the `parallel` feature.
    pub num_threads: Option<usize>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            trial_count: 20_000,
            seed:        42,
            num_threads: None,
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> SimResult<()> {
        if self.trial_count == 0 {
            return Err(SimError::Config("trial_count must be > 0".into()));
        }
        if self.num_threads == Some(0) {
            return Err(SimError::Config("num_threads must be > 0 when set".into()));
        }
        Ok(())
    }
}
