//! Named network scenarios, built in or loaded from JSON.
//!
//! ```json
//! [
//!   { "name": "3 lines", "params": { "endpoint_count": 14, "directs_per_endpoint": 3,
//!     "departure_interval": 10, "travel_time": 40, "punctuality": 5, "flexibility": 0.5 } }
//! ]
//! ```
//!
//! `flexibility` may be omitted, in which case every traveller waits for a
//! scheduled departure.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use tt_core::SimulationParameters;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scenario {
    pub name:   String,
    pub params: SimulationParameters,
}

/// The two networks compared by default: the same 14 endpoints served by
/// three direct lines per endpoint, or by one.
pub fn default_scenarios() -> Vec<Scenario> {
    let three = SimulationParameters::default();
    let one = SimulationParameters { directs_per_endpoint: 1, ..three.clone() };
    vec![
        Scenario { name: "3 lines/endpoint".into(), params: three },
        Scenario { name: "1 line/endpoint".into(), params: one },
    ]
}

pub fn load_scenarios(path: &Path) -> Result<Vec<Scenario>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading scenarios from {}", path.display()))?;
    parse_scenarios(&text).with_context(|| format!("parsing {}", path.display()))
}

fn parse_scenarios(text: &str) -> Result<Vec<Scenario>> {
    let scenarios: Vec<Scenario> = serde_json::from_str(text)?;
    if scenarios.is_empty() {
        bail!("scenario list is empty");
    }
    Ok(scenarios)
}
