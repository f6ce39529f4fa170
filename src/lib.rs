//! Cobertura: class-coverage analysis for active-learning sample selection
//!
//! Given a dataset's ground-truth labels and the sample rankings produced
//! by acquisition strategies, cobertura reports the fraction of all
//! distinct classes covered by progressively larger selection prefixes,
//! either for stored strategy rankings (`active`) or for seeded random
//! baselines (`random`).
//!
//! ## Architecture
//!
//! - `coverage`: the estimator, dataset-family subset schedules, random trials
//! - `data`: ground-truth label access and `.npy` loading
//! - `config`: training-config and dataset-spec YAML schemas
//! - `cli`: argument surface and command dispatch
//!
//! ## Example
//!
//! ```
//! use cobertura::coverage::CoverageEstimator;
//!
//! // 6 samples, 3 classes: the first 3 samples cover 2 of them
//! let estimator = CoverageEstimator::new(&[0, 0, 1, 2, 2, 2])?;
//! assert_eq!(estimator.coverage(&[0, 1, 2])?, 2.0 / 3.0);
//! # Ok::<(), cobertura::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod coverage;
pub mod data;
pub mod error;

pub use error::{Error, Result};
