//! compare — side-by-side travel-time distributions for transit networks.
//!
//! Runs every scenario through the Monte Carlo model with the same seed and
//! prints, per scenario, the summary line (average, median, 95 % arrival
//! time, deviation) followed by a bar chart of the histogram.  With `--out`
//! the bins and summaries are also written as CSV.
//!
//! `--delay-check` skips the network model and histograms raw draws of the
//! delay distribution instead, printing the closed-form moments alongside.

mod scenario;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use log::{debug, error, info};
use rand::distributions::Distribution;

use tt_core::{DelayDistribution, SimRng};
use tt_output::{CsvWriter, OutputWriter, render_bars};
use tt_sim::{RangePolicy, RunConfig, RunObserver, TravelSimulator};
use tt_stats::HistogramAccumulator;

use scenario::{Scenario, default_scenarios, load_scenarios};

// ── Constants ─────────────────────────────────────────────────────────────────

const DELAY_CHECK_SAMPLES: u64 = 10_000;
const DELAY_CHECK_WIDTH:   f64 = 10.0;
const DELAY_CHECK_MAX:     f64 = 30.0;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "compare")]
#[command(about = "Compare travel-time distributions of simplified transit networks")]
struct Cli {
    /// Synthetic travellers per scenario
    #[arg(long, default_value_t = 20_000)]
    trials: u64,

    /// Master RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Worker threads (default: all logical cores)
    #[arg(long)]
    threads: Option<usize>,

    /// JSON file with a list of { name, params } scenarios
    #[arg(long)]
    scenarios: Option<PathBuf>,

    /// Width in characters of the largest histogram bar
    #[arg(long, default_value_t = 60)]
    bar_width: usize,

    /// Skip the bar charts
    #[arg(long)]
    no_chart: bool,

    /// Directory for histogram.csv and summaries.csv
    #[arg(long)]
    out: Option<PathBuf>,

    /// Histogram raw delay draws instead of running the network model
    #[arg(long)]
    delay_check: bool,
}

// ── Progress logging ──────────────────────────────────────────────────────────

struct LogProgress<'a> {
    scenario: &'a str,
}

impl RunObserver for LogProgress<'_> {
    fn on_run_start(&mut self, trial_count: u64, blocks: usize) {
        debug!("{}: {trial_count} trials in {blocks} blocks", self.scenario);
    }

    fn on_block_end(&mut self, block: usize, trials_done: u64) {
        debug!("{}: block {block} done ({trials_done} trials)", self.scenario);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if cli.delay_check {
        return delay_check(&cli);
    }

    let scenarios = match &cli.scenarios {
        Some(path) => load_scenarios(path)?,
        None => default_scenarios(),
    };
    let config = RunConfig {
        trial_count: cli.trials,
        seed:        cli.seed,
        num_threads: cli.threads,
    };
    if let Err(e) = config.validate() {
        error!("invalid run configuration: {e}");
        return Err(e.into());
    }

    let mut writer = match &cli.out {
        Some(dir) => Some(CsvWriter::new(dir)?),
        None => None,
    };

    let policy = RangePolicy::default();
    for scenario in &scenarios {
        let (hist, elapsed) = match run_scenario(scenario, &config, &policy) {
            Ok(done) => done,
            Err(e) => {
                error!("scenario {:?}: {e}", scenario.name);
                return Err(e);
            }
        };
        let summary = hist.summarize()?;
        info!("{}: {summary} ({elapsed:.1?})", scenario.name);

        println!("=== {} ===", scenario.name);
        println!("{}", scenario.params);
        println!("{summary}");
        if !cli.no_chart {
            print!("{}", render_bars(&hist, cli.bar_width));
        }
        println!();

        if let Some(w) = writer.as_mut() {
            w.write_histogram(&scenario.name, &hist)?;
            w.write_summary(&scenario.name, &summary)?;
        }
    }

    if let (Some(mut w), Some(dir)) = (writer, &cli.out) {
        w.finish()?;
        info!("wrote histogram.csv and summaries.csv to {}", dir.display());
    }
    Ok(())
}

fn run_scenario(
    scenario: &Scenario,
    config:   &RunConfig,
    policy:   &RangePolicy,
) -> Result<(HistogramAccumulator, std::time::Duration)> {
    let sim = TravelSimulator::new(scenario.params.clone())?;
    let mut hist = sim.configure_sink(policy)?;
    let start = Instant::now();
    let report = sim.run_seeded(config, &mut hist, &mut LogProgress { scenario: &scenario.name })?;
    info!(
        "{}: {report}, direct share {:.3} (expected {:.3})",
        scenario.name,
        report.direct_fraction(),
        sim.direct_ratio()
    );
    Ok((hist, start.elapsed()))
}

fn delay_check(cli: &Cli) -> Result<()> {
    let dist = DelayDistribution::new(0.0, DELAY_CHECK_WIDTH)?;
    let mut hist = HistogramAccumulator::new(0.0, DELAY_CHECK_MAX, 1.0)?;
    let mut rng = SimRng::new(cli.seed);
    for _ in 0..DELAY_CHECK_SAMPLES {
        hist.add(dist.sample(rng.inner()));
    }
    let summary = hist.summarize()?;

    println!("=== delay distribution (center 0, width {DELAY_CHECK_WIDTH}) ===");
    println!("{summary}");
    println!("expected mean {:.2}, deviation {:.2}", dist.mean(), dist.std_dev());
    if !cli.no_chart {
        print!("{}", render_bars(&hist, cli.bar_width));
    }
    Ok(())
}
