//! Compile command implementation.
//!
//! The `venvctl compile` command pins every `requirements/*.in` source into
//! a per-platform `.txt` manifest.

use crate::error::Result;
use crate::shell::{SystemRunner, ToolRunner};
use crate::ui::UserInterface;
use crate::venv::VenvContext;

use super::dispatcher::{with_manager, Command, CommandResult};

/// The compile command implementation.
pub struct CompileCommand {
    ctx: VenvContext,
}

impl CompileCommand {
    /// Create a new compile command.
    pub fn new(ctx: VenvContext) -> Self {
        Self { ctx }
    }

    /// Run the command with the given tool runner.
    pub fn run(&self, runner: &mut dyn ToolRunner, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let written = with_manager(&self.ctx, runner, ui, |manager| manager.compile())?;
        if !written.is_empty() {
            ui.success(&format!("Compiled {} manifest(s)", written.len()));
        }
        Ok(CommandResult::success())
    }
}

impl Command for CompileCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.run(&mut SystemRunner::new(), ui)
    }
}
