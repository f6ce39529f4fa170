//! CLI command implementations

mod active;
mod random;

use std::fs;

use crate::cli::logging::{log, LogLevel};
use crate::cli::{Cli, Method};
use crate::config::{load_dataset_spec, load_train_config, resolve_work_dir};
use crate::coverage::{CoverageEstimator, SizeCategory, SubsetSchedule};
use crate::data::{build_dataset, InMemoryDataset, LabelSource};

/// Execute the analysis selected by the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let level = LogLevel::from_flags(cli.quiet, cli.verbose);

    match cli.method {
        Method::Active => active::run_active(&cli, level),
        Method::Random => random::run_random(&cli, level),
    }
}

/// State both methods start from: the dataset, its coverage estimator,
/// and the subset schedule for its family
struct Session {
    family: String,
    dataset: InMemoryDataset,
    estimator: CoverageEstimator,
    schedule: SubsetSchedule,
}

fn open_session(cli: &Cli, level: LogLevel) -> Result<Session, String> {
    let train_cfg = load_train_config(&cli.config).map_err(|e| e.to_string())?;
    let work_dir = resolve_work_dir(
        &cli.config,
        cli.work_dir.as_deref(),
        train_cfg.work_dir.as_deref(),
    );
    fs::create_dir_all(&work_dir)
        .map_err(|e| format!("failed to create work dir {}: {e}", work_dir.display()))?;

    let spec = load_dataset_spec(&cli.dataset_config).map_err(|e| e.to_string())?;
    let dataset = build_dataset(&spec).map_err(|e| e.to_string())?;
    let estimator = CoverageEstimator::new(dataset.gt_labels()).map_err(|e| e.to_string())?;

    // The family grid is validated for both methods, even though the
    // random method evaluates its own fixed percentage points.
    let category = SizeCategory::from_dataset_family(spec.family()).map_err(|e| e.to_string())?;
    let schedule = SubsetSchedule::build(category, dataset.len());

    log(
        level,
        LogLevel::Normal,
        &format!("Cobertura: class coverage for {}", spec.name),
    );
    log(
        level,
        LogLevel::Verbose,
        &format!("  work dir: {}", work_dir.display()),
    );
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "  samples: {}, distinct classes: {}",
            dataset.len(),
            estimator.distinct_classes()
        ),
    );

    Ok(Session {
        family: spec.family().to_string(),
        dataset,
        estimator,
        schedule,
    })
}
