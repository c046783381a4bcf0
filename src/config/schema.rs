//! Project configuration schema.
//!
//! Every field is optional; an absent `venvctl.yml` is equivalent to an
//! empty one.

use serde::Deserialize;
use std::path::{Component, PathBuf};

/// Root configuration structure for `venvctl.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Prompt label shown by the activated environment.
    ///
    /// Defaults to `<project-dir-name>/<venv_dir>`.
    #[serde(default)]
    pub prompt: Option<String>,

    /// Environment directory, relative to the project root.
    #[serde(default = "default_venv_dir")]
    pub venv_dir: PathBuf,

    /// Directory holding `*.in` sources and compiled manifests.
    #[serde(default = "default_requirements_dir")]
    pub requirements_dir: PathBuf,

    /// Local override file, relative to the project root.
    #[serde(default = "default_env_file")]
    pub env_file: PathBuf,

    /// Interpreters used to create the environment.
    #[serde(default)]
    pub interpreters: Interpreters,

    /// Executables that must launch for the environment to be valid.
    ///
    /// Relative paths are resolved against the environment's `Scripts`
    /// directory.
    #[serde(default)]
    pub required_executables: Vec<PathBuf>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            prompt: None,
            venv_dir: default_venv_dir(),
            requirements_dir: default_requirements_dir(),
            env_file: default_env_file(),
            interpreters: Interpreters::default(),
            required_executables: Vec::new(),
        }
    }
}

impl ProjectConfig {
    /// Check constraints the YAML schema cannot express.
    ///
    /// `venv_dir` must be a relative path made only of plain names, so the
    /// environment root is always a directory strictly below the project
    /// root. `rm` deletes that directory recursively.
    pub fn validate(&self) -> Result<(), String> {
        let mut components = self.venv_dir.components().peekable();
        let plain = components.peek().is_some()
            && components.all(|c| matches!(c, Component::Normal(_)));

        if plain {
            Ok(())
        } else {
            Err(format!(
                "venv_dir must be a relative directory below the project root, got \"{}\"",
                self.venv_dir.display()
            ))
        }
    }
}

/// Per-platform interpreter settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Interpreters {
    /// Interpreter executable on linux.
    #[serde(default = "default_linux_interpreter")]
    pub linux: String,

    /// Launcher argv on windows, asked for the real interpreter path.
    #[serde(default = "default_windows_launcher")]
    pub windows: Vec<String>,
}

impl Default for Interpreters {
    fn default() -> Self {
        Self {
            linux: default_linux_interpreter(),
            windows: default_windows_launcher(),
        }
    }
}

fn default_venv_dir() -> PathBuf {
    PathBuf::from("venv")
}

fn default_requirements_dir() -> PathBuf {
    PathBuf::from("requirements")
}

fn default_env_file() -> PathBuf {
    PathBuf::from(".env")
}

fn default_linux_interpreter() -> String {
    "python3".to_string()
}

fn default_windows_launcher() -> Vec<String> {
    vec!["py".to_string(), "-3".to_string()]
}
