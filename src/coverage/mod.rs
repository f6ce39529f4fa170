//! Class-coverage estimation over acquisition orderings
//!
//! - `estimator`: coverage ratios and per-class counts over label arrays
//! - `schedule`: dataset-family percentage grids and absolute subset sizes
//! - `trials`: seeded random-selection baselines with mean/stddev aggregation

mod estimator;
mod schedule;
mod trials;

#[cfg(test)]
mod tests;

pub use estimator::{class_coverage_ratio, count_per_class, evaluate_strategy, CoverageEstimator};
pub use schedule::{ScheduleEntry, SizeCategory, SubsetSchedule};
pub use trials::{evaluate_random_trials, TrialStats};
