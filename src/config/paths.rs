//! Filesystem layout of a project's environment.

use std::path::{Component, Path, PathBuf};

use super::schema::ProjectConfig;

/// Name of the executable directory every platform exposes.
pub const COMMON_BIN_DIR: &str = "Scripts";

/// Paths computed once per invocation from the project root and config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenvPaths {
    /// Absolute project root.
    pub project_root: PathBuf,

    /// Environment root directory.
    pub root: PathBuf,

    /// `Scripts` directory inside the environment.
    pub common_bin: PathBuf,

    /// Interpreter inside the environment.
    pub python: PathBuf,

    /// Requirements directory.
    pub requirements: PathBuf,

    /// Local override file.
    pub env_file: PathBuf,
}

impl VenvPaths {
    /// Compute the layout for `project_root`.
    ///
    /// Relative roots are made absolute against the current directory so
    /// that paths handed to tools do not depend on their working directory.
    pub fn new(project_root: &Path, config: &ProjectConfig) -> Self {
        let project_root = normalize_path(
            &std::path::absolute(project_root).unwrap_or_else(|_| project_root.to_path_buf()),
        );
        let root = project_root.join(&config.venv_dir);
        let common_bin = root.join(COMMON_BIN_DIR);

        Self {
            python: common_bin.join("python"),
            requirements: project_root.join(&config.requirements_dir),
            env_file: project_root.join(&config.env_file),
            project_root,
            root,
            common_bin,
        }
    }

    /// A tool installed in the environment's `Scripts` directory.
    pub fn tool(&self, name: &str) -> PathBuf {
        self.common_bin.join(name)
    }

    /// The activation script written by the environment-creation tool.
    pub fn activate_script(&self) -> PathBuf {
        self.common_bin.join("activate")
    }

    /// A file in the requirements directory.
    pub fn requirements_file(&self, file_name: &str) -> PathBuf {
        self.requirements.join(file_name)
    }

    /// Whether the environment root exists.
    pub fn venv_exists(&self) -> bool {
        self.root.exists()
    }
}

/// Absolute, lexically normalized form of `path`.
///
/// `.` components are dropped and `..` pops the previous component. Symlinks
/// are not resolved.
pub fn clean_path(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    normalize_path(&absolute)
}

/// Lexically normalize `path` without touching the filesystem.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(component),
            },
            other => normalized.push(other),
        }
    }
    normalized
}
