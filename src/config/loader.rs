//! Configuration file discovery and loading.

use crate::config::schema::ProjectConfig;
use crate::error::{Result, VenvError};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the project config, looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "venvctl.yml";

/// Default location of the project config.
pub fn default_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILE_NAME)
}

/// Load the project config.
///
/// An explicit path must exist. Without one, `venvctl.yml` in the project
/// root is used when present, and defaults otherwise.
///
/// # Errors
///
/// Returns `ConfigNotFound` if an explicit path doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid or a value is out of
/// range (such as a `venv_dir` outside the project).
pub fn load_project_config(project_root: &Path, explicit: Option<&Path>) -> Result<ProjectConfig> {
    let path = match explicit {
        Some(path) if !path.exists() => {
            return Err(VenvError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        Some(path) => path.to_path_buf(),
        None => {
            let path = default_config_path(project_root);
            if !path.exists() {
                tracing::debug!("No config at {}, using defaults", path.display());
                return Ok(ProjectConfig::default());
            }
            path
        }
    };

    tracing::debug!("Loading config from {}", path.display());
    let content = fs::read_to_string(&path)?;
    parse_config(&content, &path)
}

/// Parse YAML content into ProjectConfig.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<ProjectConfig> {
    if content.trim().is_empty() {
        return Ok(ProjectConfig::default());
    }

    let config: ProjectConfig =
        serde_yaml::from_str(content).map_err(|e| VenvError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    config
        .validate()
        .map_err(|message| VenvError::ConfigParseError {
            path: source_path.to_path_buf(),
            message,
        })?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_default_config_yields_defaults() {
        let temp = TempDir::new().unwrap();

        let config = load_project_config(temp.path(), None).unwrap();

        assert_eq!(config, ProjectConfig::default());
    }

    #[test]
    fn loads_default_config_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "venv_dir: .venv\n").unwrap();

        let config = load_project_config(temp.path(), None).unwrap();

        assert_eq!(config.venv_dir, PathBuf::from(".venv"));
    }

    #[test]
    fn explicit_config_overrides_default_location() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "venv_dir: ignored\n").unwrap();
        let explicit = temp.path().join("other.yml");
        fs::write(&explicit, "venv_dir: env\n").unwrap();

        let config = load_project_config(temp.path(), Some(&explicit)).unwrap();

        assert_eq!(config.venv_dir, PathBuf::from("env"));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        let explicit = temp.path().join("absent.yml");

        let result = load_project_config(temp.path(), Some(&explicit));

        assert!(matches!(result, Err(VenvError::ConfigNotFound { .. })));
    }

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse_config("\n  \n", Path::new("venvctl.yml")).unwrap();

        assert_eq!(config, ProjectConfig::default());
    }

    #[test]
    fn invalid_yaml_reports_path() {
        let err = parse_config("venv_dir: [unclosed", Path::new("venvctl.yml")).unwrap_err();

        match err {
            VenvError::ConfigParseError { path, .. } => {
                assert_eq!(path, PathBuf::from("venvctl.yml"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn venv_dir_escaping_project_is_rejected() {
        for yaml in ["venv_dir: ''\n", "venv_dir: .\n", "venv_dir: ..\n", "venv_dir: /srv/venv\n"] {
            let err = parse_config(yaml, Path::new("venvctl.yml")).unwrap_err();

            match err {
                VenvError::ConfigParseError { message, .. } => {
                    assert!(message.contains("venv_dir"), "{yaml}")
                }
                other => panic!("unexpected error for {yaml}: {other}"),
            }
        }
    }
}
