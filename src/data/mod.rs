//! Dataset access: ground-truth labels behind a narrow collaborator surface.
//!
//! Dataset construction proper (image decoding, transforms, splits) lives
//! in the training framework; this tool only ever consumes sample counts
//! and per-sample class ids, so that is the whole trait.

pub mod npy;

use crate::config::DatasetSpec;
use crate::error::{Error, Result};

/// The slice of dataset behaviour the coverage analysis consumes
pub trait LabelSource {
    /// Number of samples
    fn len(&self) -> usize;

    /// True when the dataset holds no samples
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ground-truth class id per sample, index-aligned with the dataset
    fn gt_labels(&self) -> &[i64];
}

/// Labels fully materialized in memory.
///
/// Label arrays are one integer per sample, small enough to hold
/// outright even for the largest families this tool sees.
#[derive(Debug, Clone)]
pub struct InMemoryDataset {
    labels: Vec<i64>,
}

impl InMemoryDataset {
    pub fn new(labels: Vec<i64>) -> Self {
        Self { labels }
    }
}

impl LabelSource for InMemoryDataset {
    fn len(&self) -> usize {
        self.labels.len()
    }

    fn gt_labels(&self) -> &[i64] {
        &self.labels
    }
}

/// Construct the dataset a spec describes, validating its declared shape
pub fn build_dataset(spec: &DatasetSpec) -> Result<InMemoryDataset> {
    let labels = npy::load_i64_array(&spec.labels)?;
    if labels.is_empty() {
        return Err(Error::Data(format!(
            "label array {} is empty",
            spec.labels.display()
        )));
    }
    if let Some(expected) = spec.num_samples {
        if labels.len() != expected {
            return Err(Error::Data(format!(
                "label array {} holds {} entries, dataset declares {expected}",
                spec.labels.display(),
                labels.len()
            )));
        }
    }
    Ok(InMemoryDataset::new(labels))
}
