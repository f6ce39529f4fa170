//! CLI argument surface.
//!
//! Flag names use the underscore spelling the experiment drivers pass,
//! not clap's default kebab-case.

use clap::Parser;
use std::path::PathBuf;

/// Cobertura: class coverage of active-learning sample selections
#[derive(Parser, Debug, Clone)]
#[command(name = "cobertura")]
#[command(version)]
#[command(about = "Count how many true classes progressively larger selected subsets cover")]
pub struct Cli {
    /// Training config file path (consulted for work-dir resolution)
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Directory to save results into
    #[arg(long = "work_dir")]
    pub work_dir: Option<PathBuf>,

    /// Directory holding one subdirectory per dataset with `<strategy>_idx.npy` files
    #[arg(long = "idx_dir")]
    pub idx_dir: Option<PathBuf>,

    /// Dataset construction config file path
    #[arg(
        long = "dataset_config",
        default_value = "configs/benchmarks/classification/tsne_pathmnist.yaml"
    )]
    pub dataset_config: PathBuf,

    /// Evaluation method
    #[arg(long, default_value = "active")]
    pub method: Method,

    /// Random seed
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors and result rows
    #[arg(short, long)]
    pub quiet: bool,
}

/// Selection source to evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Stored acquisition-strategy rankings
    #[default]
    Active,
    /// Seeded uniform random draws
    Random,
}

impl std::str::FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Method::Active),
            "random" => Ok(Method::Random),
            _ => Err(format!("Unknown method: {s}. Valid methods: active, random")),
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Active => write!(f, "active"),
            Method::Random => write!(f, "random"),
        }
    }
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
