//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything, including where each tool runs.
    Verbose,
    /// Show status messages and the commands being launched.
    #[default]
    Normal,
    /// Show only final results and errors.
    Quiet,
}

impl OutputMode {
    /// Pick a mode from the global `--verbose`/`--quiet` flags.
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

    /// Check if this mode shows the `Launching:` block before each tool.
    pub fn shows_commands(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows the working directory of each tool.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
