//! CLI module: argument parsing, output gating, and command dispatch.
//!
//! # Usage
//!
//! ```bash
//! cobertura <config> --idx_dir ./selection_idx
//! cobertura <config> --method random --seed 7
//! cobertura <config> --dataset_config configs/benchmarks/classification/tsne_bloodmnist.yaml -v
//! ```

mod args;
mod commands;
pub mod logging;

pub use args::{parse_args, Cli, Method};
pub use commands::run_command;
pub use logging::LogLevel;
