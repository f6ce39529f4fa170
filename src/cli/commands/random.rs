//! Random-method evaluation: seeded baseline coverage statistics.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::open_session;
use crate::cli::logging::{log, LogLevel};
use crate::cli::Cli;
use crate::coverage::{evaluate_random_trials, ScheduleEntry};
use crate::data::LabelSource;

/// Baseline percentage points in parts-per-100_000; the blood/organa
/// comparison runs are pinned to these two regardless of the family grid
const RANDOM_PCM: [u32; 2] = [100, 200];

/// Independent draws aggregated per percentage point
const TRIAL_COUNT: usize = 60;

pub(super) fn run_random(cli: &Cli, level: LogLevel) -> Result<(), String> {
    let session = open_session(cli, level)?;
    let total = session.dataset.len();
    let mut rng = StdRng::seed_from_u64(cli.seed);

    log(
        level,
        LogLevel::Verbose,
        &format!("  {TRIAL_COUNT} trials per percentage, seed {}", cli.seed),
    );

    for pcm in RANDOM_PCM {
        let entry = ScheduleEntry::from_pcm(pcm, total);
        let stats =
            evaluate_random_trials(&session.estimator, total, entry.size, TRIAL_COUNT, &mut rng)
                .map_err(|e| e.to_string())?;
        println!("{} {} {}", entry.label, stats.mean, stats.stddev);
    }

    Ok(())
}
