//! Cobertura CLI
//!
//! Entry point for the class-coverage analysis tool.
//!
//! # Usage
//!
//! ```bash
//! # Coverage of each stored acquisition ranking
//! cobertura configs/selfsup/simclr_r18.yaml \
//!     --idx_dir ./selection_idx \
//!     --dataset_config configs/benchmarks/classification/tsne_pathmnist.yaml
//!
//! # Seeded random-selection baseline
//! cobertura configs/selfsup/simclr_r18.yaml --method random --seed 7
//! ```

use clap::Parser;
use cobertura::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
