//! Shared fixtures for environment operation tests.

use std::fs;
use std::path::Path;
use std::time::Duration;

use tempfile::TempDir;

use crate::config::{EnvSnapshot, ProjectConfig};
use crate::platform::Platform;
use crate::retry::RetryPolicy;
use crate::shell::MockRunner;
use crate::ui::MockUI;

use super::{VenvContext, VenvManager};

/// A temporary project with a context pointing into it.
pub(crate) struct Fixture {
    _temp: TempDir,
    pub ctx: VenvContext,
}

impl Fixture {
    pub fn linux() -> Self {
        Self::with_config(ProjectConfig::default(), Platform::Linux)
    }

    pub fn with_config(config: ProjectConfig, platform: Platform) -> Self {
        let temp = TempDir::new().unwrap();
        let ctx = VenvContext::new(temp.path(), config, platform);
        Self { _temp: temp, ctx }
    }

    pub fn manager<'a>(&'a self, runner: &'a mut MockRunner, ui: &'a mut MockUI) -> VenvManager<'a> {
        self.manager_with_env(EnvSnapshot::default(), runner, ui)
    }

    pub fn manager_with_env<'a>(
        &'a self,
        env: EnvSnapshot,
        runner: &'a mut MockRunner,
        ui: &'a mut MockUI,
    ) -> VenvManager<'a> {
        VenvManager::new(&self.ctx, env, runner, ui)
            .with_removal_policy(RetryPolicy::new(4, Duration::ZERO))
    }

    /// Runner that creates the environment directory like `python -m venv`.
    pub fn venv_runner(&self) -> MockRunner {
        let mut runner = MockRunner::new();
        runner.simulate_venv_creation(self.ctx.profile.venv_bin_dir);
        runner
    }

    /// Write `<root>/Scripts/activate` recording `recorded` as the
    /// creation path.
    pub fn write_activate(&self, recorded: &Path) {
        self.write_activate_script(&format!(
            "# This file must be used with \"source bin/activate\"\n\nVIRTUAL_ENV='{}'\nexport VIRTUAL_ENV\n",
            recorded.display()
        ));
    }

    pub fn write_activate_script(&self, content: &str) {
        let bin = &self.ctx.paths.common_bin;
        fs::create_dir_all(bin).unwrap();
        fs::write(bin.join("activate"), content).unwrap();
    }

    /// Create empty files in the requirements directory.
    pub fn write_requirements(&self, names: &[&str]) {
        let dir = &self.ctx.paths.requirements;
        fs::create_dir_all(dir).unwrap();
        for name in names {
            fs::write(dir.join(name), "").unwrap();
        }
    }
}
