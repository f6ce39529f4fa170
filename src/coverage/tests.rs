//! Tests for coverage estimation, schedules, and random trials.

use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;
use crate::error::Error;

// -------------------------------------------------------------------------
// Coverage ratios
// -------------------------------------------------------------------------

#[test]
fn coverage_counts_distinct_classes() {
    // 6 samples, 3 classes
    let labels = [0, 0, 1, 2, 2, 2];

    assert_eq!(class_coverage_ratio(&labels, &[0, 1]).unwrap(), 1.0 / 3.0);
    assert_eq!(class_coverage_ratio(&labels, &[0, 1, 2]).unwrap(), 2.0 / 3.0);
    assert_eq!(class_coverage_ratio(&labels, &[0, 1, 2, 3]).unwrap(), 1.0);
}

#[test]
fn coverage_of_empty_selection_is_zero() {
    let labels = [4, 4, 7];
    assert_eq!(class_coverage_ratio(&labels, &[]).unwrap(), 0.0);
}

#[test]
fn coverage_of_full_selection_is_one() {
    let labels = [3, 1, 4, 1, 5, 9, 2, 6];
    let all: Vec<usize> = (0..labels.len()).collect();
    assert_eq!(class_coverage_ratio(&labels, &all).unwrap(), 1.0);
}

#[test]
fn coverage_ignores_duplicate_classes_in_selection() {
    let labels = [0, 0, 0, 1];
    assert_eq!(class_coverage_ratio(&labels, &[0, 1, 2]).unwrap(), 0.5);
}

#[test]
fn coverage_rejects_out_of_range_index() {
    let estimator = CoverageEstimator::new(&[0, 1]).unwrap();
    let err = estimator.coverage(&[2]).unwrap_err();
    assert!(matches!(err, Error::Data(_)), "expected Data error, got {err}");
}

#[test]
fn estimator_rejects_empty_labels() {
    let err = CoverageEstimator::new(&[]).unwrap_err();
    assert!(matches!(err, Error::Domain(_)), "expected Domain error, got {err}");
}

#[test]
fn estimator_denominator_is_computed_once() {
    let estimator = CoverageEstimator::new(&[5, 5, 5, 8]).unwrap();
    assert_eq!(estimator.distinct_classes(), 2);
}

// -------------------------------------------------------------------------
// Per-class counts
// -------------------------------------------------------------------------

#[test]
fn count_per_class_fills_dense_slots() {
    let counts = count_per_class(&[0, 0, 1, 2, 2, 2], 3).unwrap();
    assert_eq!(counts, vec![2, 1, 3]);
}

#[test]
fn count_per_class_keeps_absent_classes_at_zero() {
    let counts = count_per_class(&[0, 3], 5).unwrap();
    assert_eq!(counts, vec![1, 0, 0, 1, 0]);
}

#[test]
fn count_per_class_rejects_out_of_range_labels() {
    assert!(matches!(count_per_class(&[0, 5], 3), Err(Error::Data(_))));
    assert!(matches!(count_per_class(&[-1], 3), Err(Error::Data(_))));
}

// -------------------------------------------------------------------------
// Subset schedules
// -------------------------------------------------------------------------

#[test]
fn category_mapping_covers_all_families() {
    assert_eq!(
        SizeCategory::from_dataset_family("pathmnist").unwrap(),
        SizeCategory::FineLowStart
    );
    for family in ["organamnist", "pneumoniamnist", "bloodmnist", "dermamnist"] {
        assert_eq!(
            SizeCategory::from_dataset_family(family).unwrap(),
            SizeCategory::Medium
        );
    }
    for family in ["tissuemnist", "octmnist"] {
        assert_eq!(
            SizeCategory::from_dataset_family(family).unwrap(),
            SizeCategory::MediumFine
        );
    }
    for family in ["breastmnist", "retinamnist"] {
        assert_eq!(
            SizeCategory::from_dataset_family(family).unwrap(),
            SizeCategory::Sparse
        );
    }
}

#[test]
fn unknown_family_has_no_fallback_grid() {
    let err = SizeCategory::from_dataset_family("cifar10").unwrap_err();
    assert!(matches!(err, Error::Config(_)), "expected Config error, got {err}");
}

#[test]
fn sparse_schedule_first_entry() {
    let schedule = SubsetSchedule::build(SizeCategory::Sparse, 100_000);
    let first = &schedule.entries()[0];
    assert_eq!(first.pcm, 500);
    assert_eq!(first.label, "00500");
    assert_eq!(first.size, 500);
}

#[test]
fn grid_lengths_match_their_segments() {
    assert_eq!(SizeCategory::FineLowStart.grid().len(), 71);
    assert_eq!(SizeCategory::Medium.grid().len(), 27);
    assert_eq!(SizeCategory::MediumFine.grid().len(), 36);
    assert_eq!(SizeCategory::Sparse.grid().len(), 37);
}

#[test]
fn fine_low_start_grid_endpoints() {
    let grid = SizeCategory::FineLowStart.grid();
    assert_eq!(grid.first(), Some(&15));
    assert_eq!(grid.last(), Some(&95_000));
}

#[test]
fn schedule_sizes_floor_and_stay_in_bounds() {
    let schedule = SubsetSchedule::build(SizeCategory::Medium, 12);
    // 12 * 900 / 100_000 floors to 0; 12 * 9_000 / 100_000 floors to 1
    assert_eq!(schedule.entries()[8].size, 0);
    assert_eq!(schedule.entries()[17].size, 1);
    assert!(schedule.entries().iter().all(|e| e.size <= 12));
    assert_eq!(schedule.max_size(), 10);
}

#[test]
fn schedule_labels_are_zero_padded_to_width_five() {
    let schedule = SubsetSchedule::build(SizeCategory::MediumFine, 1_000);
    assert_eq!(schedule.entries()[0].label, "00010");
    assert!(schedule.entries().iter().all(|e| e.label.len() == 5));
}

#[test]
fn schedule_is_deterministic() {
    let a = SubsetSchedule::build(SizeCategory::Sparse, 13_007);
    let b = SubsetSchedule::build(SizeCategory::Sparse, 13_007);
    assert_eq!(a, b);
}

// -------------------------------------------------------------------------
// Strategy evaluation
// -------------------------------------------------------------------------

#[test]
fn evaluate_strategy_yields_one_ratio_per_entry() {
    // 1000 samples cycling through 10 classes; identity ranking
    let labels: Vec<i64> = (0..1000).map(|i| i % 10).collect();
    let order: Vec<usize> = (0..1000).collect();
    let estimator = CoverageEstimator::new(&labels).unwrap();
    let schedule = SubsetSchedule::build(SizeCategory::Medium, labels.len());

    let ratios = evaluate_strategy(&estimator, &order, &schedule).unwrap();
    assert_eq!(ratios.len(), schedule.entries().len());
    // smallest prefix is a single sample, largest covers every class
    assert_eq!(ratios[0], 0.1);
    assert_eq!(*ratios.last().unwrap(), 1.0);
    assert!(ratios.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn evaluate_strategy_rejects_short_order() {
    let labels: Vec<i64> = (0..1000).map(|i| i % 10).collect();
    let order: Vec<usize> = (0..100).collect();
    let estimator = CoverageEstimator::new(&labels).unwrap();
    let schedule = SubsetSchedule::build(SizeCategory::Medium, labels.len());

    let err = evaluate_strategy(&estimator, &order, &schedule).unwrap_err();
    assert!(matches!(err, Error::Data(_)), "expected Data error, got {err}");
}

// -------------------------------------------------------------------------
// Random trials
// -------------------------------------------------------------------------

#[test]
fn single_trial_has_zero_stddev() {
    let labels: Vec<i64> = (0..50).map(|i| i % 5).collect();
    let estimator = CoverageEstimator::new(&labels).unwrap();
    let mut rng = StdRng::seed_from_u64(3);

    let stats = evaluate_random_trials(&estimator, 50, 10, 1, &mut rng).unwrap();
    assert_eq!(stats.stddev, 0.0);
    assert!((0.0..=1.0).contains(&stats.mean));
}

#[test]
fn trials_are_reproducible_from_the_seed() {
    let labels: Vec<i64> = (0..200).map(|i| i % 7).collect();
    let estimator = CoverageEstimator::new(&labels).unwrap();

    let mut rng_a = StdRng::seed_from_u64(42);
    let mut rng_b = StdRng::seed_from_u64(42);
    let a = evaluate_random_trials(&estimator, 200, 20, 60, &mut rng_a).unwrap();
    let b = evaluate_random_trials(&estimator, 200, 20, 60, &mut rng_b).unwrap();
    assert_eq!(a, b);
}

#[test]
fn full_subset_always_covers_every_class() {
    let labels: Vec<i64> = (0..30).map(|i| i % 3).collect();
    let estimator = CoverageEstimator::new(&labels).unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    let stats = evaluate_random_trials(&estimator, 30, 30, 5, &mut rng).unwrap();
    assert_eq!(stats.mean, 1.0);
    assert_eq!(stats.stddev, 0.0);
}

#[test]
fn oversized_subset_is_rejected() {
    let estimator = CoverageEstimator::new(&[0, 1]).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let err = evaluate_random_trials(&estimator, 2, 3, 1, &mut rng).unwrap_err();
    assert!(matches!(err, Error::Data(_)));
}

#[test]
fn zero_trials_are_rejected() {
    let estimator = CoverageEstimator::new(&[0, 1]).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let err = evaluate_random_trials(&estimator, 2, 1, 0, &mut rng).unwrap_err();
    assert!(matches!(err, Error::Data(_)));
}

#[test]
fn trial_stats_aggregate_mean_and_population_stddev() {
    let stats = TrialStats::from_ratios(&[0.2, 0.4, 0.6, 0.8]);
    assert_abs_diff_eq!(stats.mean, 0.5, epsilon = 1e-12);
    // population variance of {0.2, 0.4, 0.6, 0.8} is 0.05
    assert_abs_diff_eq!(stats.stddev, 0.05_f64.sqrt(), epsilon = 1e-12);
}
