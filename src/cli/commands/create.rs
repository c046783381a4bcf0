//! Create command implementation.
//!
//! The `venvctl create` command builds a new venv and installs the full
//! pinned requirement set into it.

use crate::error::Result;
use crate::shell::{SystemRunner, ToolRunner};
use crate::ui::UserInterface;
use crate::venv::VenvContext;

use super::dispatcher::{with_manager, Command, CommandResult};

/// The create command implementation.
pub struct CreateCommand {
    ctx: VenvContext,
}

impl CreateCommand {
    /// Create a new create command.
    pub fn new(ctx: VenvContext) -> Self {
        Self { ctx }
    }

    /// Run the command with the given tool runner.
    pub fn run(&self, runner: &mut dyn ToolRunner, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        with_manager(&self.ctx, runner, ui, |manager| manager.create(false))?;
        ui.success(&format!("venv created at {}", self.ctx.paths.root.display()));
        Ok(CommandResult::success())
    }
}

impl Command for CreateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.run(&mut SystemRunner::new(), ui)
    }
}
