//! Training-config access.
//!
//! The analysis reads exactly one key from the training config, the
//! work directory, and derives a default when neither the CLI nor the
//! config pins one.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// The slice of a training config this tool consumes.
///
/// Real training configs carry models, optimizers, and schedules; all
/// unknown keys are ignored on load.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrainConfig {
    /// Output directory pinned by the config, if any
    #[serde(default)]
    pub work_dir: Option<PathBuf>,
}

/// Load a training config from a YAML file
pub fn load_train_config(path: &Path) -> Result<TrainConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("failed to read config file {}: {e}", path.display())))?;
    serde_yaml::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))
}

/// Resolve the directory results are written into.
///
/// Priority: CLI override, then the config's own `work_dir`, then
/// `./work_dirs/<type>/<config stem>/data_selection` where `<type>` is
/// the second component of the config path.
pub fn resolve_work_dir(
    config_path: &Path,
    cli_override: Option<&Path>,
    config_work_dir: Option<&Path>,
) -> PathBuf {
    if let Some(dir) = cli_override {
        return dir.to_path_buf();
    }
    if let Some(dir) = config_work_dir {
        return dir.to_path_buf();
    }

    let work_type = config_path
        .iter()
        .nth(1)
        .and_then(|c| c.to_str())
        .unwrap_or(".");
    let stem = config_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("config");
    PathBuf::from("./work_dirs")
        .join(work_type)
        .join(stem)
        .join("data_selection")
}
