//! Class-coverage computation over ground-truth label arrays.

use std::collections::HashSet;

use super::schedule::SubsetSchedule;
use crate::error::{Error, Result};

/// Coverage estimator for one dataset.
///
/// Holds the label array and the distinct-class denominator, which is
/// computed once at construction and reused across every subset query.
#[derive(Debug, Clone)]
pub struct CoverageEstimator {
    labels: Vec<i64>,
    distinct_classes: usize,
}

impl CoverageEstimator {
    /// Build an estimator over a full ground-truth label array.
    ///
    /// Rejects an empty array: a denominator of zero distinct classes
    /// would make every ratio undefined.
    pub fn new(labels: &[i64]) -> Result<Self> {
        let distinct: HashSet<i64> = labels.iter().copied().collect();
        if distinct.is_empty() {
            return Err(Error::Domain(
                "cannot compute class coverage over a dataset with zero distinct classes"
                    .to_string(),
            ));
        }
        Ok(Self {
            labels: labels.to_vec(),
            distinct_classes: distinct.len(),
        })
    }

    /// Number of distinct classes in the full dataset
    pub fn distinct_classes(&self) -> usize {
        self.distinct_classes
    }

    /// Fraction of all distinct classes represented by the given sample
    /// indices. An empty selection covers nothing and yields `0.0`.
    pub fn coverage(&self, indices: &[usize]) -> Result<f64> {
        let mut seen = HashSet::new();
        for &i in indices {
            let label = self.labels.get(i).ok_or_else(|| {
                Error::Data(format!(
                    "sample index {i} out of range for {} labels",
                    self.labels.len()
                ))
            })?;
            seen.insert(*label);
        }
        Ok(seen.len() as f64 / self.distinct_classes as f64)
    }
}

/// One-shot convenience over [`CoverageEstimator`]
pub fn class_coverage_ratio(labels: &[i64], indices: &[usize]) -> Result<f64> {
    CoverageEstimator::new(labels)?.coverage(indices)
}

/// Dense per-class occurrence counts (the input a distribution histogram
/// is drawn from). Every label must fall in `[0, num_classes)`.
pub fn count_per_class(labels: &[i64], num_classes: usize) -> Result<Vec<usize>> {
    let mut counts = vec![0usize; num_classes];
    for &label in labels {
        let slot = usize::try_from(label)
            .ok()
            .filter(|&c| c < num_classes)
            .ok_or_else(|| Error::Data(format!("label {label} outside [0, {num_classes})")))?;
        counts[slot] += 1;
    }
    Ok(counts)
}

/// Coverage of each scheduled prefix of a strategy's selection order.
///
/// The result holds one ratio per schedule entry, in schedule order. A
/// selection order shorter than a requested prefix is malformed input.
pub fn evaluate_strategy(
    estimator: &CoverageEstimator,
    order: &[usize],
    schedule: &SubsetSchedule,
) -> Result<Vec<f64>> {
    let mut ratios = Vec::with_capacity(schedule.entries().len());
    for entry in schedule.entries() {
        let prefix = order.get(..entry.size).ok_or_else(|| {
            Error::Data(format!(
                "selection order holds {} indices, schedule asks for {}",
                order.len(),
                entry.size
            ))
        })?;
        ratios.push(estimator.coverage(prefix)?);
    }
    Ok(ratios)
}
