//! `tt-core` — foundational types for the `rust_tt` travel-time simulator.
//!
//! This crate is a dependency of every other `tt-*` crate.  It has no `tt-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`params`]      | `SimulationParameters`                                |
//! | [`delay`]       | `DelayDistribution`                                   |
//! | [`rng`]         | `StreamRng` (per trial block), `SimRng` (global)      |
//! | [`error`]       | `TtError`, `TtResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `SimulationParameters`.  |

pub mod delay;
pub mod error;
pub mod params;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use delay::DelayDistribution;
pub use error::{TtError, TtResult};
pub use params::SimulationParameters;
pub use rng::{SimRng, StreamRng};
