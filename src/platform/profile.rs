//! Per-platform environment layout.

use super::Platform;

/// Static description of how a platform lays out an environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformProfile {
    /// The platform this profile describes.
    pub platform: Platform,

    /// Suffix used in compiled manifest names (`base.<suffix>.txt`).
    pub requirements_suffix: &'static str,

    /// Directory, relative to the environment root, where the
    /// environment-creation tool places executables.
    pub venv_bin_dir: &'static str,

    /// Whether the executable directory must be linked to the common
    /// `Scripts` location after creation.
    pub needs_symlink: bool,
}

impl PlatformProfile {
    /// Profile for the given platform.
    pub const fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Linux => Self {
                platform,
                requirements_suffix: "linux",
                venv_bin_dir: "bin",
                needs_symlink: true,
            },
            Platform::Windows => Self {
                platform,
                requirements_suffix: "windows",
                venv_bin_dir: "Scripts",
                needs_symlink: false,
            },
        }
    }
}
