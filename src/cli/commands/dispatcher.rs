//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use clap::CommandFactory;

use crate::cli::args::{Cli, Commands};
use crate::config::{load_project_config, EnvSnapshot};
use crate::error::Result;
use crate::platform::Platform;
use crate::shell::ToolRunner;
use crate::ui::UserInterface;
use crate::venv::{VenvContext, VenvManager};

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    platform: Option<String>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            config_path: None,
            platform: None,
        }
    }

    /// Use an explicit config file instead of `<project>/venvctl.yml`.
    pub fn with_config(mut self, config_path: Option<PathBuf>) -> Self {
        self.config_path = config_path;
        self
    }

    /// Act as the given platform identifier instead of the running one.
    pub fn with_platform(mut self, platform: Option<String>) -> Self {
        self.platform = platform;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Resolve the platform, load the config and compute paths.
    pub fn context(&self) -> Result<VenvContext> {
        let platform = match &self.platform {
            Some(identifier) => Platform::from_identifier(identifier)?,
            None => Platform::detect()?,
        };
        let config = load_project_config(&self.project_root, self.config_path.as_deref())?;
        let ctx = VenvContext::new(&self.project_root, config, platform);

        tracing::debug!(
            "Platform {}, venv at {}",
            platform,
            ctx.paths.root.display()
        );
        Ok(ctx)
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. Without a subcommand the help text is printed.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Check) => {
                let cmd = super::check::CheckCommand::new(self.context()?);
                cmd.execute(ui)
            }
            Some(Commands::Create) => {
                let cmd = super::create::CreateCommand::new(self.context()?);
                cmd.execute(ui)
            }
            Some(Commands::Ensure(args)) => {
                let cmd = super::ensure::EnsureCommand::new(self.context()?, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Rm(args)) => {
                let cmd = super::rm::RmCommand::new(self.context()?, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Compile) => {
                let cmd = super::compile::CompileCommand::new(self.context()?);
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                Cli::command().print_help()?;
                Ok(CommandResult::success())
            }
        }
    }
}

/// Run `op` with a manager for `ctx`, handing tools the project's
/// environment snapshot.
pub(crate) fn with_manager<T, F>(
    ctx: &VenvContext,
    runner: &mut dyn ToolRunner,
    ui: &mut dyn UserInterface,
    op: F,
) -> Result<T>
where
    F: FnOnce(&mut VenvManager<'_>) -> Result<T>,
{
    let env = EnvSnapshot::load(&ctx.paths.env_file)?;
    let mut manager = VenvManager::new(ctx, env, runner, ui);
    op(&mut manager)
}
