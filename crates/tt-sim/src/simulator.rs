//! The `TravelSimulator` and its trial loop.

use std::fmt;
use std::ops::Range;
#[cfg(feature = "parallel")]
use std::sync::Arc;

use log::{debug, trace};
use rand::Rng;
use rand::distributions::Distribution;

use tt_core::{DelayDistribution, SimulationParameters, StreamRng};
use tt_stats::HistogramAccumulator;

use crate::{RangePolicy, RunConfig, RunObserver, SimError, SimResult};

/// Trials per RNG stream in a seeded run.
///
/// Fixed so that a seed maps to the same stream assignment whatever the
/// thread count.
pub const TRIALS_PER_BLOCK: u64 = 4_096;

// ── Per-trial output ──────────────────────────────────────────────────────────

/// Whether a synthetic traveller's destination needed a transfer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Route {
    Direct,
    Transfer,
}

/// One synthetic traveller.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrialOutcome {
    pub route:       Route,
    /// Did not wait for a scheduled departure.
    pub flexible:    bool,
    /// End-to-end travel time; this is the value folded into the histogram.
    pub travel_time: f64,
}

/// Trial counts from one run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunReport {
    pub trials:          u64,
    pub direct_trials:   u64,
    pub flexible_trials: u64,
}

impl RunReport {
    #[inline]
    fn record(&mut self, outcome: &TrialOutcome) {
        self.trials += 1;
        self.direct_trials += (outcome.route == Route::Direct) as u64;
        self.flexible_trials += outcome.flexible as u64;
    }

    fn merge(&mut self, other: &RunReport) {
        self.trials += other.trials;
        self.direct_trials += other.direct_trials;
        self.flexible_trials += other.flexible_trials;
    }

    /// Observed share of direct trips (0 when no trials ran).
    pub fn direct_fraction(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.direct_trials as f64 / self.trials as f64
        }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} trials ({} direct, {} flexible)",
            self.trials, self.direct_trials, self.flexible_trials
        )
    }
}

// ── TravelSimulator ───────────────────────────────────────────────────────────

/// Monte Carlo model of end-to-end travel time.
///
/// Holds validated parameters and the delay distribution; the histogram is
/// always owned by the caller and passed in per run, so the simulator itself
/// carries no state between runs.
#[derive(Clone, Debug)]
pub struct TravelSimulator {
    params:       SimulationParameters,
    delay:        DelayDistribution,
    direct_ratio: f64,
}

impl TravelSimulator {
    /// Validate `params` and build the delay distribution
    /// (`center = 0`, `width = punctuality`).
    pub fn new(params: SimulationParameters) -> SimResult<Self> {
        params.validate()?;
        let delay = DelayDistribution::new(0.0, params.punctuality)?;
        Ok(Self {
            direct_ratio: params.direct_ratio(),
            params,
            delay,
        })
    }

    #[inline]
    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    #[inline]
    pub fn delay(&self) -> &DelayDistribution {
        &self.delay
    }

    /// Probability that a trial takes the direct route.
    #[inline]
    pub fn direct_ratio(&self) -> f64 {
        self.direct_ratio
    }

    /// A fresh accumulator sized for these parameters by `policy`.
    pub fn configure_sink(&self, policy: &RangePolicy) -> SimResult<HistogramAccumulator> {
        policy.validate()?;
        let (min, max) = policy.range_for(&self.params);
        Ok(HistogramAccumulator::new(min, max, policy.bin_width)?)
    }

    /// Draw one synthetic traveller.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> TrialOutcome {
        let p = &self.params;

        let direct = rng.r#gen::<f64>() < self.direct_ratio;
        let delay = self.delay.sample(rng);
        let flexible = match p.flexibility {
            Some(share) => rng.r#gen::<f64>() < share,
            None => false,
        };

        let wait = if flexible {
            0.0
        } else if direct {
            // Several lines serve the pair, so same-line departures are spaced
            // `interval × directs` apart.
            rng.r#gen::<f64>() * p.departure_interval * p.directs_per_endpoint as f64
        } else {
            rng.r#gen::<f64>() * p.departure_interval
        };

        let mut travel_time = wait + p.travel_time + delay;
        let route = if direct {
            Route::Direct
        } else {
            travel_time += rng.r#gen::<f64>() * p.departure_interval;
            Route::Transfer
        };

        TrialOutcome { route, flexible, travel_time }
    }

    /// Run `trial_count` trials from `rng` into `sink`.
    ///
    /// `sink` is not reset; configure it first (e.g. with
    /// [`configure_sink`](Self::configure_sink)).
    pub fn run<R: Rng + ?Sized>(
        &self,
        rng:         &mut R,
        trial_count: u64,
        sink:        &mut HistogramAccumulator,
    ) -> SimResult<RunReport> {
        if trial_count == 0 {
            return Err(SimError::Config("trial_count must be > 0".into()));
        }
        debug!("run: {trial_count} trials into {sink}");

        let report = self.fill(rng, trial_count, sink);

        debug!("run finished: {report}");
        Ok(report)
    }

    /// Deterministic run seeded from `config.seed`.
    ///
    /// Trials are split into blocks of [`TRIALS_PER_BLOCK`]; block `k` draws
    /// from `StreamRng::new(seed, k)` into its own partial histogram, and the
    /// partials are merged into `sink` in block order.  Blocks run in windows
    /// of a few blocks per worker, so at most one window of partials is alive
    /// at a time.  With the `parallel` feature each window runs on Rayon; the
    /// result is identical either way.
    pub fn run_seeded<O: RunObserver>(
        &self,
        config:   &RunConfig,
        sink:     &mut HistogramAccumulator,
        observer: &mut O,
    ) -> SimResult<RunReport> {
        config.validate()?;
        let blocks = usize::try_from(config.trial_count.div_ceil(TRIALS_PER_BLOCK))
            .map_err(|_| SimError::Config("trial_count too large".into()))?;
        let executor = BlockExecutor::new(config.num_threads)?;
        let window = executor.window();

        debug!(
            "seeded run: {} trials, seed {}, {} blocks ({} per window) into {}",
            config.trial_count, config.seed, blocks, window, sink
        );
        observer.on_run_start(config.trial_count, blocks);

        let template = sink.empty_like();
        let run_block = |block: usize| {
            let start = block as u64 * TRIALS_PER_BLOCK;
            let trials = TRIALS_PER_BLOCK.min(config.trial_count - start);
            let mut rng = StreamRng::new(config.seed, block as u64);
            let mut partial = template.empty_like();
            let report = self.fill(rng.inner(), trials, &mut partial);
            (partial, report)
        };

        let mut report = RunReport::default();
        for range in windows(blocks, window) {
            let first = range.start;
            let partials = executor.run(range, &run_block);
            for (offset, (partial, block_report)) in partials.into_iter().enumerate() {
                let block = first + offset;
                sink.merge(&partial)?;
                report.merge(&block_report);
                trace!("block {block} merged: {} trials so far", report.trials);
                observer.on_block_end(block, report.trials);
            }
        }

        observer.on_run_end(&report, sink);
        debug!("seeded run finished: {report}");
        Ok(report)
    }

    fn fill<R: Rng + ?Sized>(
        &self,
        rng:    &mut R,
        trials: u64,
        sink:   &mut HistogramAccumulator,
    ) -> RunReport {
        let mut report = RunReport::default();
        for _ in 0..trials {
            let outcome = self.sample(rng);
            report.record(&outcome);
            sink.add(outcome.travel_time);
        }
        report
    }
}

// ── Block execution ───────────────────────────────────────────────────────────

/// Blocks handed to each worker per window.
#[cfg_attr(not(feature = "parallel"), allow(dead_code))]
pub(crate) const BLOCKS_PER_WORKER: usize = 4;

type BlockOutput = (HistogramAccumulator, RunReport);

/// Consecutive, in-order block ranges of at most `window` blocks.
pub(crate) fn windows(blocks: usize, window: usize) -> impl Iterator<Item = Range<usize>> {
    let window = window.max(1);
    (0..blocks)
        .step_by(window)
        .map(move |first| first..(first + window).min(blocks))
}

/// Runs one window of blocks at a time, one block after another.
#[cfg(not(feature = "parallel"))]
pub(crate) struct BlockExecutor;

#[cfg(not(feature = "parallel"))]
impl BlockExecutor {
    pub(crate) fn new(_num_threads: Option<usize>) -> SimResult<Self> {
        Ok(BlockExecutor)
    }

    /// One partial at a time.
    pub(crate) fn window(&self) -> usize {
        1
    }

    fn run<F>(&self, blocks: Range<usize>, run_block: &F) -> Vec<BlockOutput>
    where
        F: Fn(usize) -> BlockOutput,
    {
        blocks.map(run_block).collect()
    }
}

/// Runs one window of blocks at a time on Rayon, returning partials in block
/// order.
#[cfg(feature = "parallel")]
pub(crate) struct BlockExecutor {
    /// `None` runs on the global pool.
    pool: Option<Arc<rayon::ThreadPool>>,
}

#[cfg(feature = "parallel")]
impl BlockExecutor {
    pub(crate) fn new(num_threads: Option<usize>) -> SimResult<Self> {
        let pool = num_threads.map(shared_pool).transpose()?;
        Ok(Self { pool })
    }

    /// [`BLOCKS_PER_WORKER`] blocks for every thread of the pool in use.
    pub(crate) fn window(&self) -> usize {
        let workers = match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        };
        workers.max(1) * BLOCKS_PER_WORKER
    }

    fn run<F>(&self, blocks: Range<usize>, run_block: &F) -> Vec<BlockOutput>
    where
        F: Fn(usize) -> BlockOutput + Sync + Send,
    {
        use rayon::prelude::*;

        let compute = || blocks.into_par_iter().map(run_block).collect::<Vec<_>>();
        match &self.pool {
            Some(pool) => pool.install(compute),
            None => compute(),
        }
    }
}

/// Process-wide pool with `num_threads` workers, built on first use.
#[cfg(feature = "parallel")]
pub(crate) fn shared_pool(num_threads: usize) -> SimResult<Arc<rayon::ThreadPool>> {
    use std::sync::{Mutex, OnceLock};

    static POOLS: OnceLock<Mutex<Vec<(usize, Arc<rayon::ThreadPool>)>>> = OnceLock::new();

    let mut pools = POOLS
        .get_or_init(Default::default)
        .lock()
        .map_err(|_| SimError::Config("thread pool cache poisoned".into()))?;
    if let Some((_, pool)) = pools.iter().find(|(n, _)| *n == num_threads) {
        return Ok(Arc::clone(pool));
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .map_err(|e| SimError::Config(format!("thread pool: {e}")))?;
    let pool = Arc::new(pool);
    pools.push((num_threads, Arc::clone(&pool)));
    debug!("built {num_threads}-thread pool");
    Ok(pool)
}
