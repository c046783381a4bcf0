//! Visual theme and styling.

use console::Style;

/// venvctl's visual theme.
#[derive(Debug, Clone)]
pub struct VenvTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for the `Launching:` label (magenta).
    pub info: Style,
    /// Style for command arguments (dim italic).
    pub command: Style,
    /// Style for secondary text (dim).
    pub dim: Style,
}

impl Default for VenvTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl VenvTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().magenta(),
            command: Style::new().dim().italic(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            command: Style::new(),
            dim: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format the `Launching:` block, one argument per line.
    pub fn format_command(&self, argv: &[String]) -> String {
        let mut out = format!("{}", self.info.apply_to("Launching: "));
        for arg in argv {
            out.push_str(&format!("\n    {}", self.command.apply_to(arg)));
        }
        out
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
