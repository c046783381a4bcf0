//! Platform detection and dispatch.
//!
//! The platform identifier is a coarse OS string such as `linux` or
//! `win32`. It is resolved once at startup into a [`Platform`] through a
//! prefix table and then threaded through every operation as data.

mod profile;

pub use profile::PlatformProfile;

use std::fmt;

use crate::error::{Result, VenvError};

/// Supported platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Linux,
    Windows,
}

/// Prefix table used to resolve platform identifiers.
pub const PLATFORM_TABLE: &[(&str, Platform)] =
    &[("linux", Platform::Linux), ("win32", Platform::Windows)];

impl Platform {
    /// Resolve a platform identifier (`linux`, `linux2`, `win32`, ...).
    pub fn from_identifier(identifier: &str) -> Result<Self> {
        select(PLATFORM_TABLE, identifier).copied()
    }

    /// Resolve the platform this binary is running on.
    pub fn detect() -> Result<Self> {
        Self::from_identifier(current_identifier())
    }

    /// Returns the identifier this platform is known by.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::Windows => "win32",
        }
    }

    /// Returns the static profile for this platform.
    pub fn profile(self) -> PlatformProfile {
        PlatformProfile::for_platform(self)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Select the first handler whose prefix matches `identifier`.
///
/// Matching is by prefix so that versioned identifiers such as `linux2`
/// still resolve. Returns [`VenvError::PlatformUnsupported`] when no entry
/// matches.
pub fn select<'t, H>(table: &'t [(&str, H)], identifier: &str) -> Result<&'t H> {
    table
        .iter()
        .find(|(prefix, _)| identifier.starts_with(prefix))
        .map(|(_, handler)| handler)
        .ok_or_else(|| VenvError::PlatformUnsupported {
            platform: identifier.to_string(),
        })
}

/// Platform identifier of the running operating system.
pub fn current_identifier() -> &'static str {
    match std::env::consts::OS {
        "windows" => "win32",
        "macos" => "darwin",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn resolves_known_identifiers() {
        assert_eq!(Platform::from_identifier("linux").unwrap(), Platform::Linux);
        assert_eq!(Platform::from_identifier("win32").unwrap(), Platform::Windows);
    }

    #[test]
    fn matches_by_prefix() {
        assert_eq!(Platform::from_identifier("linux2").unwrap(), Platform::Linux);
    }

    #[test]
    fn rejects_unknown_identifier() {
        let err = Platform::from_identifier("darwin").unwrap_err();
        match err {
            VenvError::PlatformUnsupported { platform } => assert_eq!(platform, "darwin"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn exact_match_is_not_required_but_prefix_must_lead() {
        assert!(Platform::from_identifier("xlinux").is_err());
        assert!(Platform::from_identifier("").is_err());
    }

    #[test]
    fn unsupported_identifier_invokes_no_handler() {
        let calls = Cell::new(0);
        let linux = || calls.set(calls.get() + 1);
        let windows = || calls.set(calls.get() + 1);
        let table: [(&str, &dyn Fn()); 2] = [("linux", &linux), ("win32", &windows)];

        for identifier in ["darwin", "freebsd13", "cygwin", "aix"] {
            let result = select(&table, identifier).map(|handler| handler());
            assert!(matches!(
                result,
                Err(VenvError::PlatformUnsupported { .. })
            ));
        }
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn selected_handler_runs_once() {
        let calls = Cell::new(0);
        let linux = || calls.set(calls.get() + 1);
        let windows = || calls.set(calls.get() + 100);
        let table: [(&str, &dyn Fn()); 2] = [("linux", &linux), ("win32", &windows)];

        select(&table, "linux").unwrap()();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn first_matching_prefix_wins() {
        let table = [("lin", 1), ("linux", 2)];
        assert_eq!(*select(&table, "linux").unwrap(), 1);
    }

    #[test]
    fn display_uses_identifier() {
        assert_eq!(Platform::Windows.to_string(), "win32");
        assert_eq!(Platform::Linux.to_string(), "linux");
    }

    #[test]
    fn current_identifier_is_not_empty() {
        assert!(!current_identifier().is_empty());
    }
}
