//! venvctl - Manage a project's Python virtual environment.
//!
//! venvctl creates a virtual environment inside a project, installs pinned
//! per-platform requirements into it, keeps it in sync, verifies it has not
//! been relocated, compiles requirement sources, and removes it.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Project config, paths and the tool environment snapshot
//! - [`error`] - Error types and result aliases
//! - [`platform`] - Platform detection and per-platform layout
//! - [`retry`] - Bounded retry policy
//! - [`shell`] - External tool invocation
//! - [`ui`] - Terminal output
//! - [`venv`] - Environment lifecycle operations
//!
//! # Example
//!
//! ```
//! use venvctl::config::EnvFileParser;
//!
//! let vars = EnvFileParser::parse("# comment\nFOO=bar\nBAZ=1\n");
//! assert_eq!(vars.len(), 2);
//! assert_eq!(vars["FOO"], "bar");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod platform;
pub mod retry;
pub mod shell;
pub mod ui;
pub mod venv;

pub use error::{Result, VenvError};
