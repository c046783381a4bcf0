//! Error types for venvctl operations.
//!
//! This module defines [`VenvError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `VenvError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `VenvError::Other`) for unexpected errors
//! - Every error is reported once by `main` and turned into exit code 1

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for venvctl operations.
#[derive(Debug, Error)]
pub enum VenvError {
    /// No platform handler matches the current platform identifier.
    #[error("Platform not supported: {platform}")]
    PlatformUnsupported { platform: String },

    /// The environment root exists already.
    #[error(
        "venv already exists at {}. if you know it is safe, remove it with:\n    venvctl rm",
        .path.display()
    )]
    AlreadyExists { path: PathBuf },

    /// The environment root does not exist.
    #[error("venv not found at: {}", .path.display())]
    NotFound { path: PathBuf },

    /// An external tool exited unsuccessfully.
    #[error("Command failed with exit code {code:?}: {command}")]
    ToolInvocationFailed { command: String, code: Option<i32> },

    /// An external tool could not be started at all.
    #[error("Failed to launch {command}: {source}")]
    ToolLaunchFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The activation script has no assignment for the expected variable.
    #[error("{name} assignment not found in \"{}\"", .path.display())]
    AssignmentNotFound { name: String, path: PathBuf },

    /// The assignment exists but its value is not a single shell word.
    #[error("{name} assignment in \"{}\" is not a single path", .path.display())]
    MalformedAssignment { name: String, path: PathBuf },

    /// The environment was created at one path and now lives at another.
    #[error(
        "venv should be at \"{}\" but has been moved to \"{}\"",
        .recorded.display(),
        .expected.display()
    )]
    EnvironmentMoved { recorded: PathBuf, expected: PathBuf },

    /// A required executable is missing.
    #[error("required file \"{}\" not found", .path.display())]
    ExecutableNotFound { path: PathBuf },

    /// A required executable exists but cannot be run.
    #[error("required file \"{}\" not runnable", .path.display())]
    ExecutableNotRunnable { path: PathBuf },

    /// An explicitly requested configuration file does not exist.
    #[error("Configuration not found: {}", .path.display())]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the project configuration file.
    #[error("Failed to parse config at {}: {message}", .path.display())]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for venvctl operations.
pub type Result<T> = std::result::Result<T, VenvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_unsupported_displays_platform() {
        let err = VenvError::PlatformUnsupported {
            platform: "plan9".into(),
        };
        assert_eq!(err.to_string(), "Platform not supported: plan9");
    }

    #[test]
    fn already_exists_includes_remediation_hint() {
        let err = VenvError::AlreadyExists {
            path: PathBuf::from("/proj/venv"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/proj/venv"));
        assert!(msg.contains("venvctl rm"));
    }

    #[test]
    fn not_found_displays_path() {
        let err = VenvError::NotFound {
            path: PathBuf::from("/proj/venv"),
        };
        assert_eq!(err.to_string(), "venv not found at: /proj/venv");
    }

    #[test]
    fn tool_invocation_failed_displays_command_and_code() {
        let err = VenvError::ToolInvocationFailed {
            command: "pip-sync base.linux.txt".into(),
            code: Some(2),
        };
        let msg = err.to_string();
        assert!(msg.contains("pip-sync base.linux.txt"));
        assert!(msg.contains('2'));
    }

    #[test]
    fn environment_moved_names_both_paths() {
        let err = VenvError::EnvironmentMoved {
            recorded: PathBuf::from("/a/old"),
            expected: PathBuf::from("/a/new"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/a/old"));
        assert!(msg.contains("/a/new"));
    }

    #[test]
    fn assignment_not_found_names_variable_and_file() {
        let err = VenvError::AssignmentNotFound {
            name: "VIRTUAL_ENV".into(),
            path: PathBuf::from("venv/Scripts/activate"),
        };
        let msg = err.to_string();
        assert!(msg.contains("VIRTUAL_ENV"));
        assert!(msg.contains("venv/Scripts/activate"));
    }

    #[test]
    fn executable_errors_display_path() {
        let missing = VenvError::ExecutableNotFound {
            path: PathBuf::from("tool"),
        };
        let denied = VenvError::ExecutableNotRunnable {
            path: PathBuf::from("tool"),
        };
        assert!(missing.to_string().contains("not found"));
        assert!(denied.to_string().contains("not runnable"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: VenvError = io_err.into();
        assert!(matches!(err, VenvError::Io(_)));
    }
}
