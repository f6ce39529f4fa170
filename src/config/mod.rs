//! Configuration loading: training config and dataset spec (YAML).

mod dataset;
mod train;

pub use dataset::{load_dataset_spec, DatasetSpec};
pub use train::{load_train_config, resolve_work_dir, TrainConfig};
