//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Also report each bridge call once it finishes.
    Verbose,
    /// Warnings and errors only; the bridge speaks for itself.
    #[default]
    Normal,
    /// Errors only.
    Quiet,
}

impl OutputMode {
    /// Pick the mode from the global `--verbose`/`--quiet` flags.
    ///
    /// `--quiet` wins when both are given.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode shows per-invocation details.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows status messages and warnings.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
