//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, OutputMode, UserInterface, VenvTheme};

/// Terminal UI implementation.
///
/// Status output goes to stdout; warnings and errors go to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: VenvTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode, colors: bool) -> Self {
        let theme = if colors {
            VenvTheme::new()
        } else {
            VenvTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_command(&mut self, argv: &[String], cwd: Option<&std::path::Path>) {
        if !self.mode.shows_commands() {
            return;
        }
        writeln!(self.out, "{}", self.theme.format_command(argv)).ok();
        if let (true, Some(cwd)) = (self.mode.shows_details(), cwd) {
            writeln!(
                self.out,
                "{}",
                self.theme.dim.apply_to(format!("  in {}", cwd.display()))
            )
            .ok();
        }
        // Child output follows directly; keep ordering stable.
        self.out.flush().ok();
    }
}

/// Create the terminal UI.
///
/// Colors are used when `no_color` is false, `NO_COLOR` is unset, and
/// stdout is a terminal.
pub fn create_ui(mode: OutputMode, no_color: bool) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode, !no_color && should_use_colors()))
}
