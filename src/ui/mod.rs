//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal usage
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use venvctl::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("venv created");
//! assert!(ui.has_success("venv created"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, VenvTheme};

use std::path::Path;

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Announce an external command before it runs.
    fn show_command(&mut self, argv: &[String], cwd: Option<&Path>);
}
