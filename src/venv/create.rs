//! Environment creation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::anyhow;

use crate::config::PIP_SRC;
use crate::error::{Result, VenvError};
use crate::platform::Platform;

use super::VenvManager;

/// Snippet run by the windows launcher to report the real interpreter.
const PRINT_EXECUTABLE: &str = "import sys; print(sys.executable)";

impl VenvManager<'_> {
    /// Create the environment.
    ///
    /// Installs the `pre` manifest and, unless `skip_full_sync` is set,
    /// synchronizes the full requirements. A failure part way through
    /// leaves the partial environment in place.
    pub fn create(&mut self, skip_full_sync: bool) -> Result<()> {
        let ctx = self.ctx;
        let paths = &ctx.paths;

        if paths.venv_exists() {
            return Err(VenvError::AlreadyExists {
                path: paths.root.clone(),
            });
        }

        let interpreter = self.resolve_interpreter()?;
        tracing::debug!("Using interpreter {}", interpreter.display());

        self.prepare_pip_src()?;

        let venv = self
            .invocation(&interpreter)
            .args(["-m", "venv", "--prompt"])
            .arg(ctx.prompt())
            .arg(&paths.root);
        self.launch(&venv)?;

        if ctx.profile.needs_symlink {
            link_common_bin(&ctx.venv_bin(), &paths.common_bin)?;
        }

        let pre = self
            .invocation(&paths.python)
            .args(["-m", "pip", "install", "--requirement"])
            .arg(ctx.compiled_manifest("pre"));
        self.launch(&pre)?;

        if skip_full_sync {
            return Ok(());
        }

        self.sync_requirements()
    }

    /// Interpreter used to create the environment.
    ///
    /// On windows the configured launcher is asked for the path of the
    /// interpreter it selects.
    fn resolve_interpreter(&mut self) -> Result<PathBuf> {
        let ctx = self.ctx;
        let interpreters = &ctx.config.interpreters;

        match ctx.platform() {
            Platform::Linux => Ok(PathBuf::from(&interpreters.linux)),
            Platform::Windows => {
                let (launcher, launcher_args) = interpreters
                    .windows
                    .split_first()
                    .ok_or_else(|| anyhow!("interpreters.windows must name a launcher"))?;

                let query = self
                    .invocation(launcher)
                    .args(launcher_args)
                    .args(["-c", PRINT_EXECUTABLE]);
                let output = self.launch_capture(&query)?;

                let path = output.trim();
                if path.is_empty() {
                    return Err(anyhow!("{} did not report an interpreter path", launcher).into());
                }
                Ok(PathBuf::from(path))
            }
        }
    }

    /// Create the editable-install checkout directory named by `PIP_SRC`.
    ///
    /// Relative values are taken from the project root, which is where
    /// pip runs.
    fn prepare_pip_src(&self) -> Result<()> {
        let Some(pip_src) = self.env.get_os(PIP_SRC) else {
            return Ok(());
        };

        let dir = self.ctx.paths.project_root.join(pip_src);
        tracing::debug!("Ensuring {} directory {}", PIP_SRC, dir.display());
        fs::create_dir_all(&dir)?;
        Ok(())
    }
}

/// Link the common `Scripts` location to the real executable directory.
fn link_common_bin(target: &Path, link: &Path) -> Result<()> {
    tracing::debug!("Linking {} -> {}", link.display(), target.display());

    #[cfg(unix)]
    std::os::unix::fs::symlink(target, link)?;

    #[cfg(windows)]
    std::os::windows::fs::symlink_dir(target, link)?;

    Ok(())
}
