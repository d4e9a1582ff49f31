//! The Monte Carlo trial loop.
//!
//! Candidate start dates are selected once per run; each trial then draws a
//! start uniformly (with replacement) and derives its calendar window.
//! Trials are independent and stateless, so they run in seeded parallel
//! batches.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::{debug, info};

use crate::config::ResampleConfig;
use crate::error::SelectionError;
use crate::model::{HistoricalSeries, ResampleResult, ResampleWindow};
use crate::selection::{derive_window, select_candidates};

/// Run a full resampling pass: select candidates, then draw
/// `config.num_trials` windows.
///
/// Deterministic for a given `(series, config, seed)`: batches are seeded
/// from the caller's seed and the batch index, independent of thread
/// scheduling. Window order matches trial order.
pub fn run_resample(
    series: &HistoricalSeries,
    config: &ResampleConfig,
    seed: u64,
) -> Result<ResampleResult, SelectionError> {
    let candidates = select_candidates(series, config.horizon_years)?;

    if config.verbose {
        info!(
            num_trials = config.num_trials,
            "running Monte Carlo resampling"
        );
        info!(
            earliest = %candidates.earliest(),
            latest = %candidates.latest(),
            count = candidates.len(),
            tier = ?candidates.tier(),
            "candidate start dates selected"
        );
    } else {
        debug!(
            num_trials = config.num_trials,
            earliest = %candidates.earliest(),
            latest = %candidates.latest(),
            count = candidates.len(),
            "candidate start dates selected"
        );
    }

    const MAX_BATCH_SIZE: usize = 100;
    let num_batches = config.num_trials.div_ceil(MAX_BATCH_SIZE);

    let windows: Vec<ResampleWindow> = (0..num_batches)
        .into_par_iter()
        .flat_map(|i| {
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));

            let batch_size = if i == num_batches - 1 {
                config.num_trials - i * MAX_BATCH_SIZE
            } else {
                MAX_BATCH_SIZE
            };

            (0..batch_size)
                .map(|_| derive_window(candidates.sample(&mut rng), config.horizon_years))
                .collect::<Vec<_>>()
        })
        .collect();

    Ok(ResampleResult { windows })
}
