//! Configuration for venvctl.
//!
//! This module handles:
//! - The optional project config in [`schema`] and [`loader`]
//! - The environment layout in [`paths`]
//! - `.env` override parsing in [`env_file`]
//! - The environment snapshot given to tools in [`environment`]
//!
//! # Example
//!
//! ```
//! use venvctl::config::{load_project_config, VenvPaths};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("venvctl.yml"), "venv_dir: .venv").unwrap();
//!
//! let config = load_project_config(temp.path(), None).unwrap();
//! let paths = VenvPaths::new(temp.path(), &config);
//! assert!(paths.root.ends_with(".venv"));
//! ```

pub mod env_file;
pub mod environment;
pub mod loader;
pub mod paths;
pub mod schema;

pub use env_file::EnvFileParser;
pub use environment::{load_system_env, tool_settings, EnvSnapshot, PIP_SRC, TOOL_SETTINGS};
pub use loader::{default_config_path, load_project_config, parse_config, CONFIG_FILE_NAME};
pub use paths::{clean_path, normalize_path, VenvPaths, COMMON_BIN_DIR};
pub use schema::{Interpreters, ProjectConfig};
