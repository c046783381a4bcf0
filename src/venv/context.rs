//! Immutable per-invocation context.

use std::path::{Path, PathBuf};

use crate::config::{ProjectConfig, VenvPaths};
use crate::platform::{Platform, PlatformProfile};

/// Everything an operation needs to know about the project, computed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenvContext {
    /// Filesystem layout.
    pub paths: VenvPaths,

    /// Project configuration.
    pub config: ProjectConfig,

    /// Platform-specific layout and naming.
    pub profile: PlatformProfile,
}

impl VenvContext {
    /// Build the context for `project_root` on `platform`.
    pub fn new(project_root: &Path, config: ProjectConfig, platform: Platform) -> Self {
        Self {
            paths: VenvPaths::new(project_root, &config),
            profile: platform.profile(),
            config,
        }
    }

    /// The platform this context targets.
    pub fn platform(&self) -> Platform {
        self.profile.platform
    }

    /// Prompt label passed to the environment-creation tool.
    pub fn prompt(&self) -> String {
        if let Some(prompt) = &self.config.prompt {
            return prompt.clone();
        }

        let project = file_name(&self.paths.project_root);
        let venv = file_name(&self.paths.root);
        format!("{}/{}", project, venv)
    }

    /// Compiled manifest for `stem` on this platform (`<stem>.<suffix>.txt`).
    pub fn compiled_manifest(&self, stem: &str) -> PathBuf {
        self.paths.requirements_file(&format!(
            "{}.{}.txt",
            stem, self.profile.requirements_suffix
        ))
    }

    /// Directory the creation tool actually puts executables in.
    pub fn venv_bin(&self) -> PathBuf {
        self.paths.root.join(self.profile.venv_bin_dir)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
