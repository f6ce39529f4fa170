//! Random-selection baselines: coverage statistics over seeded trials.

use rand::seq::index;
use rand::Rng;

use super::estimator::CoverageEstimator;
use crate::error::{Error, Result};

/// Mean and population standard deviation over per-trial coverage ratios
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialStats {
    pub mean: f64,
    pub stddev: f64,
}

impl TrialStats {
    /// Aggregate raw per-trial ratios; the slice must be non-empty
    pub fn from_ratios(ratios: &[f64]) -> Self {
        let n = ratios.len() as f64;
        let mean = ratios.iter().sum::<f64>() / n;
        let variance = ratios.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;
        Self {
            mean,
            stddev: variance.sqrt(),
        }
    }
}

/// Coverage statistics of `trial_count` independent uniform draws of
/// `subset_size` samples from `[0, total_samples)`.
///
/// Trials are sequential draws from the one caller-owned generator, so a
/// run is reproducible from its seed alone.
pub fn evaluate_random_trials<R: Rng>(
    estimator: &CoverageEstimator,
    total_samples: usize,
    subset_size: usize,
    trial_count: usize,
    rng: &mut R,
) -> Result<TrialStats> {
    if subset_size > total_samples {
        return Err(Error::Data(format!(
            "subset size {subset_size} exceeds {total_samples} samples"
        )));
    }
    if trial_count == 0 {
        return Err(Error::Data("trial count must be positive".to_string()));
    }

    let mut ratios = Vec::with_capacity(trial_count);
    for _ in 0..trial_count {
        let selected = index::sample(rng, total_samples, subset_size).into_vec();
        ratios.push(estimator.coverage(&selected)?);
    }
    Ok(TrialStats::from_ratios(&ratios))
}
