//! Check command implementation.
//!
//! The `venvctl check` command verifies the venv has not been moved and
//! that its required executables can be launched.

use crate::error::Result;
use crate::shell::{SystemRunner, ToolRunner};
use crate::ui::UserInterface;
use crate::venv::VenvContext;

use super::dispatcher::{with_manager, Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    ctx: VenvContext,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(ctx: VenvContext) -> Self {
        Self { ctx }
    }

    /// Run the command with the given tool runner.
    pub fn run(&self, runner: &mut dyn ToolRunner, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        with_manager(&self.ctx, runner, ui, |manager| manager.check())?;
        ui.success("venv passes some basic checks");
        Ok(CommandResult::success())
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.run(&mut SystemRunner::new(), ui)
    }
}
