//! Dataset-spec schema and loading.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Dataset-construction spec.
///
/// Names follow the `<family>_<split>` convention (`pathmnist_train`);
/// the family part keys the subset-size grid and the index-file
/// directory layout.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetSpec {
    /// Dataset name, `<family>_<split>`
    pub name: String,
    /// Ground-truth label array (`.npy`, one i64 class id per sample)
    pub labels: PathBuf,
    /// Declared sample count; validated against the label array when present
    #[serde(default)]
    pub num_samples: Option<usize>,
}

impl DatasetSpec {
    /// Dataset family: the name up to the first underscore
    pub fn family(&self) -> &str {
        self.name
            .split_once('_')
            .map_or(self.name.as_str(), |(family, _)| family)
    }
}

/// Load a dataset spec from a YAML file
pub fn load_dataset_spec(path: &Path) -> Result<DatasetSpec> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!(
            "failed to read dataset config {}: {e}",
            path.display()
        ))
    })?;
    serde_yaml::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))
}
