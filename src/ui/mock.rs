//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use venvctl::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Starting");
//! ui.show_command(&["pip-sync".to_string()], None);
//!
//! assert!(ui.has_message("Starting"));
//! assert_eq!(ui.commands().len(), 1);
//! ```

use std::path::Path;

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    commands: Vec<Vec<String>>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get the argv of every announced command.
    pub fn commands(&self) -> &[Vec<String>] {
        &self.commands
    }

    /// Check if a message containing the text was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a success message containing the text was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a warning containing the text was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if an error containing the text was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_command(&mut self, argv: &[String], _cwd: Option<&Path>) {
        self.commands.push(argv.to_vec());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_each_kind_separately() {
        let mut ui = MockUI::new();

        ui.message("m");
        ui.success("s");
        ui.warning("w");
        ui.error("e");

        assert_eq!(ui.messages(), ["m"]);
        assert_eq!(ui.successes(), ["s"]);
        assert_eq!(ui.warnings(), ["w"]);
        assert!(ui.has_error("e"));
    }

    #[test]
    fn has_helpers_match_substrings() {
        let mut ui = MockUI::new();
        ui.warning("3 remaining removal attempts");

        assert!(ui.has_warning("remaining removal"));
        assert!(!ui.has_error("remaining removal"));
    }
}
