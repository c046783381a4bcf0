//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`venvctl ensure`, `venvctl rm`)
//! - Shared context loading (platform, config, paths)
//! - Consistent global flag handling
//!
//! Commands that touch the venv also expose `run`, which takes the tool
//! runner explicitly so tests can substitute a
//! [`MockRunner`](crate::shell::MockRunner).

pub mod check;
pub mod compile;
pub mod completions;
pub mod create;
pub mod dispatcher;
pub mod ensure;
pub mod rm;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
