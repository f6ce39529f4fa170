//! Subset-size schedules derived from dataset-family percentage grids.
//!
//! Dataset sizes differ by orders of magnitude across the medmnist
//! families, so each family maps to a grid with a different resolution:
//! small datasets need fine-grained early percentages, large ones
//! coarser late-stage steps. Grid values are in parts-per-100_000.

use crate::error::{Error, Result};

/// Grid segments as (start, end, step), end exclusive
type GridSegments = &'static [(u32, u32, u32)];

const FINE_LOW_START: GridSegments = &[
    (15, 100, 5),
    (100, 1_000, 50),
    (1_000, 10_000, 500),
    (10_000, 100_000, 5_000),
];

const MEDIUM: GridSegments = &[
    (100, 1_000, 100),
    (1_000, 10_000, 1_000),
    (10_000, 100_000, 10_000),
];

const MEDIUM_FINE: GridSegments = &[
    (10, 100, 10),
    (100, 1_000, 100),
    (1_000, 10_000, 1_000),
    (10_000, 100_000, 10_000),
];

const SPARSE: GridSegments = &[(500, 10_000, 500), (10_000, 100_000, 5_000)];

/// Dataset-family tag selecting a percentage grid.
///
/// There is deliberately no fallback: an unrecognized family is a
/// configuration error, not a default grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCategory {
    /// Probed from very low percentages upward (pathmnist)
    FineLowStart,
    /// Decade steps from 0.1% (organa/pneumonia/blood/derma)
    Medium,
    /// Medium with an extra fine decade below 0.1% (tissue/oct)
    MediumFine,
    /// Coarse half-percent steps for the smallest datasets (breast/retina)
    Sparse,
}

impl SizeCategory {
    /// Map a dataset family to its grid category
    pub fn from_dataset_family(family: &str) -> Result<Self> {
        match family {
            "pathmnist" => Ok(Self::FineLowStart),
            "organamnist" | "pneumoniamnist" | "bloodmnist" | "dermamnist" => Ok(Self::Medium),
            "tissuemnist" | "octmnist" => Ok(Self::MediumFine),
            "breastmnist" | "retinamnist" => Ok(Self::Sparse),
            other => Err(Error::Config(format!(
                "no percentage grid for dataset family '{other}'"
            ))),
        }
    }

    fn segments(self) -> GridSegments {
        match self {
            Self::FineLowStart => FINE_LOW_START,
            Self::Medium => MEDIUM,
            Self::MediumFine => MEDIUM_FINE,
            Self::Sparse => SPARSE,
        }
    }

    /// The full ascending grid in parts-per-100_000
    pub fn grid(self) -> Vec<u32> {
        self.segments()
            .iter()
            .flat_map(|&(start, end, step)| (start..end).step_by(step as usize))
            .collect()
    }
}

/// One target subset size with its reporting label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    /// Selected fraction in parts-per-100_000
    pub pcm: u32,
    /// Zero-padded fraction, the label used in result rows
    pub label: String,
    /// Absolute number of samples to select
    pub size: usize,
}

impl ScheduleEntry {
    /// Scale a grid fraction to an absolute subset size (floor)
    pub fn from_pcm(pcm: u32, total_samples: usize) -> Self {
        Self {
            pcm,
            label: format!("{pcm:05}"),
            size: (total_samples as u64 * u64::from(pcm) / 100_000) as usize,
        }
    }
}

/// Ordered subset-size targets for one dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsetSchedule {
    entries: Vec<ScheduleEntry>,
}

impl SubsetSchedule {
    /// Build the schedule for a family category and dataset size.
    ///
    /// Grids are ascending and below 100_000, so sizes are
    /// non-decreasing and never exceed the dataset.
    pub fn build(category: SizeCategory, total_samples: usize) -> Self {
        let entries = category
            .grid()
            .into_iter()
            .map(|pcm| ScheduleEntry::from_pcm(pcm, total_samples))
            .collect();
        Self { entries }
    }

    /// Entries in evaluation order, smallest subset first
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// Largest scheduled subset size
    pub fn max_size(&self) -> usize {
        self.entries.last().map_or(0, |e| e.size)
    }
}
