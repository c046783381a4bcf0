//! Ensure command implementation.
//!
//! The `venvctl ensure` command creates the venv when it is missing and
//! otherwise brings it back in line with the pinned requirements.

use crate::cli::args::EnsureArgs;
use crate::error::Result;
use crate::shell::{SystemRunner, ToolRunner};
use crate::ui::UserInterface;
use crate::venv::VenvContext;

use super::dispatcher::{with_manager, Command, CommandResult};

/// The ensure command implementation.
pub struct EnsureCommand {
    ctx: VenvContext,
    args: EnsureArgs,
}

impl EnsureCommand {
    /// Create a new ensure command.
    pub fn new(ctx: VenvContext, args: EnsureArgs) -> Self {
        Self { ctx, args }
    }

    /// Run the command with the given tool runner.
    pub fn run(&self, runner: &mut dyn ToolRunner, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let quick = self.args.quick;
        let outcome = with_manager(&self.ctx, runner, ui, |manager| manager.ensure(quick))?;
        ui.success(outcome.message());
        Ok(CommandResult::success())
    }
}

impl Command for EnsureCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.run(&mut SystemRunner::new(), ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectConfig;
    use crate::platform::Platform;
    use crate::shell::MockRunner;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn quick_ensure_reports_already_present() {
        let temp = TempDir::new().unwrap();
        let ctx = VenvContext::new(temp.path(), ProjectConfig::default(), Platform::Linux);
        fs::create_dir_all(&ctx.paths.common_bin).unwrap();
        fs::write(
            ctx.paths.activate_script(),
            format!("VIRTUAL_ENV='{}'\n", ctx.paths.root.display()),
        )
        .unwrap();
        let mut runner = MockRunner::new();
        let mut ui = MockUI::new();

        EnsureCommand::new(ctx, EnsureArgs { quick: true })
            .run(&mut runner, &mut ui)
            .unwrap();

        assert!(runner.invocations_of("pip-sync").is_empty());
        assert!(ui.has_success("venv already present and passes some basic checks"));
    }

    #[cfg(unix)]
    #[test]
    fn fresh_ensure_reports_created() {
        let temp = TempDir::new().unwrap();
        let ctx = VenvContext::new(temp.path(), ProjectConfig::default(), Platform::Linux);
        let mut runner = MockRunner::new();
        runner.simulate_venv_creation("bin");
        let mut ui = MockUI::new();

        EnsureCommand::new(ctx, EnsureArgs::default())
            .run(&mut runner, &mut ui)
            .unwrap();

        assert!(ui.has_success("venv created and passed some basic checks"));
    }
}
