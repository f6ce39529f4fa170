//! Output gating for CLI status lines.
//!
//! Result rows always go to stdout; the status narration around them is
//! filtered through the level selected by the global flags.

/// Verbosity for status output
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LogLevel {
    /// Errors and result rows only
    Quiet,
    /// Progress summary
    Normal,
    /// Progress plus dataset details
    Verbose,
}

impl LogLevel {
    /// Resolve the level from the global CLI flags; quiet wins
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    fn permits(self, required: LogLevel) -> bool {
        match self {
            Self::Quiet => false,
            Self::Normal => required == Self::Normal,
            Self::Verbose => required != Self::Quiet,
        }
    }
}

/// Print a status line if the current level permits it
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if level.permits(required) {
        println!("{msg}");
    }
}
