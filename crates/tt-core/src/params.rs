//! Network parameters for one simulation run.

use std::fmt;

use crate::{TtError, TtResult};

/// Parameters of the simplified transit network.
///
/// The network is never built as a graph.  Connectivity is summarised by the
/// direct-connection ratio `directs_per_endpoint / (endpoint_count - 1)`: the
/// probability that a random destination is served by a line from the
/// traveller's origin without a transfer.
///
/// Typically loaded from a scenario file by the application crate and passed
/// to the simulator, which calls [`validate`](Self::validate) before any
/// work starts.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationParameters {
    /// Number of travel endpoints (stations).  Must be at least 2.
    pub endpoint_count: u32,

    /// Number of other endpoints each endpoint reaches without a transfer.
    /// Must lie in `[1, endpoint_count - 1]`.
    pub directs_per_endpoint: u32,

    /// Time between scheduled departures on one line.
    pub departure_interval: f64,

    /// Nominal in-vehicle travel duration.
    pub travel_time: f64,

    /// Width of the delay distribution (inverse punctuality).  Roughly the
    /// average delay on a trip without transfers.
    pub punctuality: f64,

    /// Fraction of travellers who do not wait for a scheduled departure.
    /// `None` means every traveller waits.
    #[cfg_attr(feature = "serde", serde(default))]
    pub flexibility: Option<f64>,
}

impl Default for SimulationParameters {
    /// The reference network: 14 endpoints, 3 direct lines each, a departure
    /// every 10 time units, 40 units of travel, delay width 5, half the
    /// travellers flexible.
    fn default() -> Self {
        Self {
            endpoint_count:       14,
            directs_per_endpoint: 3,
            departure_interval:   10.0,
            travel_time:          40.0,
            punctuality:          5.0,
            flexibility:          Some(0.5),
        }
    }
}

impl SimulationParameters {
    /// Check every field and the cross-field invariant
    /// `directs_per_endpoint < endpoint_count`.
    pub fn validate(&self) -> TtResult<()> {
        if self.endpoint_count < 2 {
            return Err(TtError::Config(format!(
                "endpoint_count must be >= 2, got {}",
                self.endpoint_count
            )));
        }
        if self.directs_per_endpoint == 0 || self.directs_per_endpoint >= self.endpoint_count {
            return Err(TtError::Config(format!(
                "directs_per_endpoint must be in [1, {}], got {}",
                self.endpoint_count - 1,
                self.directs_per_endpoint
            )));
        }
        positive("departure_interval", self.departure_interval)?;
        positive("travel_time", self.travel_time)?;
        if !self.punctuality.is_finite() || self.punctuality < 0.0 {
            return Err(TtError::Config(format!(
                "punctuality must be finite and >= 0, got {}",
                self.punctuality
            )));
        }
        if let Some(f) = self.flexibility {
            if !(0.0..=1.0).contains(&f) {
                return Err(TtError::Config(format!(
                    "flexibility must be in [0, 1], got {f}"
                )));
            }
        }
        Ok(())
    }

    /// Probability that a random destination is directly connected.
    ///
    /// Always in `(0, 1]` for validated parameters.
    #[inline]
    pub fn direct_ratio(&self) -> f64 {
        self.directs_per_endpoint as f64 / (self.endpoint_count - 1) as f64
    }
}

impl fmt::Display for SimulationParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} endpoints, {} lines/endpoint, interval {}, travel {}, delay width {}",
            self.endpoint_count,
            self.directs_per_endpoint,
            self.departure_interval,
            self.travel_time,
            self.punctuality,
        )?;
        if let Some(flex) = self.flexibility {
            write!(f, ", {:.0}% flexible", flex * 100.0)?;
        }
        Ok(())
    }
}

fn positive(name: &str, value: f64) -> TtResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TtError::Config(format!("{name} must be finite and > 0, got {value}")))
    }
}
