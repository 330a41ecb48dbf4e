//! `tt-sim` — Monte Carlo travel-time simulator for the rust_tt framework.
//!
//! # Trial model
//!
//! ```text
//! for trial in 0..trial_count:
//!   ① Route     — direct with probability directs / (endpoints - 1),
//!                 otherwise one transfer.
//!   ② Delay     — DelayDistribution(0, punctuality).
//!   ③ Schedule  — flexible travellers wait 0; everyone else waits
//!                 U[0, interval × directs) on a direct route or
//!                 U[0, interval) on a transfer route.
//!   ④ Transfer  — transfer routes add U[0, interval).
//!   ⑤ Record    — sink.add(wait + travel_time + delay [+ transfer])
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs seeded trial blocks on Rayon's thread pool.       |
//! | `serde`    | Serde derives on `RangePolicy`, `RunConfig`, `RunReport`. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tt_core::SimulationParameters;
//! use tt_sim::{NoopObserver, RangePolicy, RunConfig, TravelSimulator};
//!
//! let sim = TravelSimulator::new(SimulationParameters::default())?;
//! let mut hist = sim.configure_sink(&RangePolicy::default())?;
//! sim.run_seeded(&RunConfig::default(), &mut hist, &mut NoopObserver)?;
//! println!("{}", hist.summarize()?);
//! ```

pub mod config;
pub mod error;
pub mod observer;
pub mod simulator;


pub use config::{RangePolicy, RunConfig};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, RunObserver};
pub use simulator::{Route, RunReport, TRIALS_PER_BLOCK, TravelSimulator, TrialOutcome};
