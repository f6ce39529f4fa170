//! `.npy` readers for label and index arrays.
//!
//! Both persisted inputs of this tool, ground-truth labels and
//! per-strategy acquisition rankings, are one-dimensional i64 arrays
//! written by the selection pipeline.

use ndarray::Array1;
use ndarray_npy::read_npy;
use std::path::Path;

use crate::error::{Error, Result};

/// Load a one-dimensional i64 array
pub fn load_i64_array(path: &Path) -> Result<Vec<i64>> {
    let array: Array1<i64> = read_npy(path)
        .map_err(|e| Error::Data(format!("failed to read {}: {e}", path.display())))?;
    Ok(array.to_vec())
}

/// Load an acquisition ranking: i64 on disk, validated into in-range
/// `usize` sample indices (most-wanted first)
pub fn load_selection_order(path: &Path, total_samples: usize) -> Result<Vec<usize>> {
    let raw = load_i64_array(path)?;
    raw.into_iter()
        .map(|v| {
            usize::try_from(v)
                .ok()
                .filter(|&i| i < total_samples)
                .ok_or_else(|| {
                    Error::Data(format!(
                        "index {v} in {} outside [0, {total_samples})",
                        path.display()
                    ))
                })
        })
        .collect()
}
