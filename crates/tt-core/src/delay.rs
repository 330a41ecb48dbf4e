//! One-sided, right-skewed travel delay distribution.
//!
//! Samples are `center + width * sqrt(-ln(U))` with `U` uniform on the open
//! interval (0, 1).  `sqrt(-ln U)` is Rayleigh-distributed with scale
//! `1/sqrt(2)`, so the closed forms are:
//!
//! | Quantity           | Value                         |
//! |--------------------|-------------------------------|
//! | minimum            | `center`                      |
//! | mean               | `center + width * sqrt(π)/2`  |
//! | standard deviation | `width * sqrt(1 - π/4)`       |

use rand::Rng;
use rand::distributions::{Distribution, Open01};

use crate::{TtError, TtResult};

/// Delay distribution with a hard floor at `center` and an unbounded tail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DelayDistribution {
    center: f64,
    width:  f64,
}

impl DelayDistribution {
    /// Build a distribution.  `width == 0` is allowed and yields the constant
    /// `center`.
    pub fn new(center: f64, width: f64) -> TtResult<Self> {
        if !center.is_finite() {
            return Err(TtError::Config(format!("delay center must be finite, got {center}")));
        }
        if !width.is_finite() || width < 0.0 {
            return Err(TtError::Config(format!(
                "delay width must be finite and >= 0, got {width}"
            )));
        }
        Ok(Self { center, width })
    }

    #[inline]
    pub fn center(&self) -> f64 {
        self.center
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Analytic mean of the distribution.
    pub fn mean(&self) -> f64 {
        self.center + self.width * std::f64::consts::PI.sqrt() / 2.0
    }

    /// Analytic standard deviation of the distribution.
    pub fn std_dev(&self) -> f64 {
        self.width * (1.0 - std::f64::consts::FRAC_PI_4).sqrt()
    }
}

impl Distribution<f64> for DelayDistribution {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        // Open01 never yields 0, so ln stays finite.
        let u: f64 = rng.sample(Open01);
        self.center + self.width * (-u.ln()).sqrt()
    }
}
