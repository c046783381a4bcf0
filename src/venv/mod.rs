//! Environment lifecycle operations.
//!
//! [`VenvManager`] bundles the per-invocation state (context, environment
//! snapshot, tool runner and UI) and exposes one method per operation:
//!
//! - [`create`](VenvManager::create) in `create.rs`
//! - [`sync_requirements`](VenvManager::sync_requirements) in `sync.rs`
//! - [`compile`](VenvManager::compile) in `compile.rs`
//! - [`ensure`](VenvManager::ensure) in `ensure.rs`
//! - [`check`](VenvManager::check) in `check.rs`
//! - [`remove`](VenvManager::remove) in `remove.rs`
//!
//! # Example
//!
//! ```
//! use venvctl::config::{EnvSnapshot, ProjectConfig};
//! use venvctl::platform::Platform;
//! use venvctl::shell::MockRunner;
//! use venvctl::ui::MockUI;
//! use venvctl::venv::{VenvContext, VenvManager};
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let ctx = VenvContext::new(temp.path(), ProjectConfig::default(), Platform::Linux);
//! let mut runner = MockRunner::new();
//! let mut ui = MockUI::new();
//!
//! let mut manager = VenvManager::new(&ctx, EnvSnapshot::default(), &mut runner, &mut ui);
//! manager.remove(true).unwrap();
//! ```

mod check;
mod compile;
mod context;
mod create;
mod ensure;
mod remove;
mod sync;

#[cfg(test)]
pub(crate) mod test_support;

pub use check::{recorded_venv_path, verify_location, VENV_PATH_VARIABLE};
pub use compile::{compiled_output_path, find_requirement_sources};
pub use context::VenvContext;
pub use ensure::EnsureOutcome;
pub use remove::{remove_tree, REMOVAL_POLICY};

use crate::config::EnvSnapshot;
use crate::error::Result;
use crate::retry::RetryPolicy;
use crate::shell::{Invocation, ToolRunner};
use crate::ui::UserInterface;

/// Runs environment operations for one top-level command.
pub struct VenvManager<'a> {
    ctx: &'a VenvContext,
    env: EnvSnapshot,
    runner: &'a mut dyn ToolRunner,
    ui: &'a mut dyn UserInterface,
    removal: RetryPolicy,
}

impl<'a> VenvManager<'a> {
    /// Create a manager. `env` is handed to every tool invocation.
    pub fn new(
        ctx: &'a VenvContext,
        env: EnvSnapshot,
        runner: &'a mut dyn ToolRunner,
        ui: &'a mut dyn UserInterface,
    ) -> Self {
        Self {
            ctx,
            env,
            runner,
            ui,
            removal: REMOVAL_POLICY,
        }
    }

    /// Override the retry policy used by [`remove`](Self::remove).
    pub fn with_removal_policy(mut self, policy: RetryPolicy) -> Self {
        self.removal = policy;
        self
    }

    /// The context this manager operates on.
    pub fn context(&self) -> &VenvContext {
        self.ctx
    }

    /// The environment snapshot given to tools.
    pub fn env(&self) -> &EnvSnapshot {
        &self.env
    }

    /// Start an invocation that runs in the project root with the snapshot.
    fn invocation(&self, program: impl AsRef<std::path::Path>) -> Invocation {
        Invocation::new(program)
            .current_dir(&self.ctx.paths.project_root)
            .env(&self.env)
    }

    fn announce(&mut self, invocation: &Invocation) {
        tracing::debug!("Launching {}", invocation.display());
        self.ui
            .show_command(&invocation.argv(), invocation.cwd.as_deref());
    }

    /// Announce and run a tool with inherited stdio.
    fn launch(&mut self, invocation: &Invocation) -> Result<()> {
        self.announce(invocation);
        self.runner.run(invocation)
    }

    /// Announce and run a tool, capturing its stdout.
    fn launch_capture(&mut self, invocation: &Invocation) -> Result<String> {
        self.announce(invocation);
        self.runner.capture(invocation)
    }
}
