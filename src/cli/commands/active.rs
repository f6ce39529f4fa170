//! Active-method evaluation: coverage of stored acquisition rankings.

use super::{open_session, Session};
use crate::cli::logging::{log, LogLevel};
use crate::cli::Cli;
use crate::coverage::{count_per_class, evaluate_strategy};
use crate::data::npy::load_selection_order;
use crate::data::LabelSource;
use crate::error::Error;

/// Acquisition strategies with stored rankings, in reporting order
const STRATEGIES: [&str; 7] = [
    "consistency",
    "vaal",
    "margin",
    "uncertainty",
    "coreset",
    "bald",
    "hard",
];

pub(super) fn run_active(cli: &Cli, level: LogLevel) -> Result<(), String> {
    let session = open_session(cli, level)?;
    let idx_dir = cli.idx_dir.as_deref().ok_or_else(|| {
        Error::Config("the active method requires --idx_dir".to_string()).to_string()
    })?;

    if level == LogLevel::Verbose {
        log_class_distribution(&session, level)?;
    }

    for strategy in STRATEGIES {
        let file = format!("{strategy}_idx.npy");
        let path = idx_dir.join(&session.family).join(&file);
        let order = load_selection_order(&path, session.dataset.len()).map_err(|e| e.to_string())?;
        let ratios = evaluate_strategy(&session.estimator, &order, &session.schedule)
            .map_err(|e| e.to_string())?;
        for (entry, ratio) in session.schedule.entries().iter().zip(&ratios) {
            println!("{file} {} {} {ratio}", entry.label, entry.size);
        }
    }

    Ok(())
}

/// Log the full-dataset per-class sample counts (the numbers a
/// distribution histogram would be drawn from)
fn log_class_distribution(session: &Session, level: LogLevel) -> Result<(), String> {
    let labels = session.dataset.gt_labels();
    let num_classes = labels.iter().max().map_or(0, |&m| (m + 1).max(0) as usize);
    let counts = count_per_class(labels, num_classes).map_err(|e| e.to_string())?;
    log(
        level,
        LogLevel::Verbose,
        &format!("  per-class sample counts: {counts:?}"),
    );
    Ok(())
}
