//! Rm command implementation.
//!
//! The `venvctl rm` command deletes the venv directory.

use crate::cli::args::RmArgs;
use crate::error::Result;
use crate::shell::{SystemRunner, ToolRunner};
use crate::ui::UserInterface;
use crate::venv::VenvContext;

use super::dispatcher::{with_manager, Command, CommandResult};

/// The rm command implementation.
pub struct RmCommand {
    ctx: VenvContext,
    args: RmArgs,
}

impl RmCommand {
    /// Create a new rm command.
    pub fn new(ctx: VenvContext, args: RmArgs) -> Self {
        Self { ctx, args }
    }

    /// Run the command with the given tool runner.
    pub fn run(&self, runner: &mut dyn ToolRunner, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let existed = self.ctx.paths.venv_exists();
        let ignore_missing = self.args.ignore_missing;
        with_manager(&self.ctx, runner, ui, |manager| manager.remove(ignore_missing))?;

        if existed {
            ui.success(&format!("Removed {}", self.ctx.paths.root.display()));
        } else {
            ui.message(&format!("No venv at {}", self.ctx.paths.root.display()));
        }
        Ok(CommandResult::success())
    }
}

impl Command for RmCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.run(&mut SystemRunner::new(), ui)
    }
}
