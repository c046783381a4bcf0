//! Environment validity checks.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::config::clean_path;
use crate::error::{Result, VenvError};

use super::VenvManager;

/// Variable the activation script sets to the environment's creation path.
pub const VENV_PATH_VARIABLE: &str = "VIRTUAL_ENV";

impl VenvManager<'_> {
    /// Check that the environment still lives where it was created and
    /// that the configured executables can be launched.
    pub fn check(&mut self) -> Result<()> {
        let ctx = self.ctx;
        let activate = ctx.paths.activate_script();

        let content = fs::read_to_string(&activate)
            .with_context(|| format!("reading {}", activate.display()))?;
        let recorded = recorded_venv_path(&content, &activate)?;
        verify_location(&recorded, &ctx.paths.root)?;

        for executable in &ctx.config.required_executables {
            self.probe_executable(&ctx.paths.common_bin.join(executable))?;
        }

        Ok(())
    }

    /// Launch `path` with empty stdin and discard its output.
    fn probe_executable(&mut self, path: &Path) -> Result<()> {
        let probe = self.invocation(path);

        match self.launch_capture(&probe) {
            Ok(_) => Ok(()),
            Err(VenvError::ToolLaunchFailed { source, .. })
                if source.kind() == io::ErrorKind::NotFound =>
            {
                Err(VenvError::ExecutableNotFound {
                    path: path.to_path_buf(),
                })
            }
            Err(VenvError::ToolLaunchFailed { source, .. })
                if source.kind() == io::ErrorKind::PermissionDenied =>
            {
                Err(VenvError::ExecutableNotRunnable {
                    path: path.to_path_buf(),
                })
            }
            Err(e) => Err(e),
        }
    }
}

/// Extract the creation path recorded in an activation script.
///
/// Lines are `NAME=value` assignments, optionally prefixed with `export`.
/// The value is split like a shell word and must be exactly one word.
/// The first well-formed assignment wins.
pub fn recorded_venv_path(content: &str, script: &Path) -> Result<PathBuf> {
    let mut malformed = false;

    for line in content.lines().map(str::trim) {
        let Some((name, value)) = line.split_once('=') else {
            continue;
        };
        let name = name.strip_prefix("export ").unwrap_or(name).trim();
        if name != VENV_PATH_VARIABLE {
            continue;
        }

        match shlex::split(value).as_deref() {
            Some([path]) => return Ok(PathBuf::from(path)),
            _ => malformed = true,
        }
    }

    let name = VENV_PATH_VARIABLE.to_string();
    let path = script.to_path_buf();
    if malformed {
        Err(VenvError::MalformedAssignment { name, path })
    } else {
        Err(VenvError::AssignmentNotFound { name, path })
    }
}

/// Fail with [`VenvError::EnvironmentMoved`] unless `recorded` and
/// `expected` name the same directory once made absolute and normalized.
pub fn verify_location(recorded: &Path, expected: &Path) -> Result<()> {
    let recorded_clean = clean_path(recorded);
    let expected_clean = clean_path(expected);
    tracing::debug!(
        "Recorded venv path {}, expected {}",
        recorded_clean.display(),
        expected_clean.display()
    );

    if recorded_clean == expected_clean {
        Ok(())
    } else {
        Err(VenvError::EnvironmentMoved {
            recorded: recorded.to_path_buf(),
            expected: expected.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::Fixture;
    use super::*;
    use crate::config::ProjectConfig;
    use crate::platform::Platform;
    use crate::shell::MockRunner;
    use crate::ui::MockUI;

    const SCRIPT: &str = "venv/Scripts/activate";

    #[test]
    fn reads_single_quoted_assignment() {
        let content = "deactivate () {\n}\n\nVIRTUAL_ENV='/home/me/proj/venv'\nexport VIRTUAL_ENV\n";

        let path = recorded_venv_path(content, Path::new(SCRIPT)).unwrap();

        assert_eq!(path, PathBuf::from("/home/me/proj/venv"));
    }

    #[test]
    fn reads_double_quoted_path_with_spaces() {
        let content = "VIRTUAL_ENV=\"/home/me/my proj/venv\"\n";

        let path = recorded_venv_path(content, Path::new(SCRIPT)).unwrap();

        assert_eq!(path, PathBuf::from("/home/me/my proj/venv"));
    }

    #[test]
    fn reads_exported_assignment() {
        let content = "    export VIRTUAL_ENV=/srv/app/venv\n";

        let path = recorded_venv_path(content, Path::new(SCRIPT)).unwrap();

        assert_eq!(path, PathBuf::from("/srv/app/venv"));
    }

    #[test]
    fn skips_command_substitution_for_plain_assignment() {
        let content = "export VIRTUAL_ENV=$(cygpath /srv/app/venv)\nexport VIRTUAL_ENV=/srv/app/venv\n";

        let path = recorded_venv_path(content, Path::new(SCRIPT)).unwrap();

        assert_eq!(path, PathBuf::from("/srv/app/venv"));
    }

    #[test]
    fn ignores_similarly_named_variables() {
        let content = "_OLD_VIRTUAL_ENV=/x\nVIRTUAL_ENV_PROMPT=(venv)\n";

        let err = recorded_venv_path(content, Path::new(SCRIPT)).unwrap_err();

        assert!(matches!(err, VenvError::AssignmentNotFound { .. }));
    }

    #[test]
    fn multi_word_value_is_malformed() {
        let content = "VIRTUAL_ENV=/a b\n";

        let err = recorded_venv_path(content, Path::new(SCRIPT)).unwrap_err();

        assert!(matches!(err, VenvError::MalformedAssignment { .. }));
    }

    #[test]
    fn relocation_names_both_paths() {
        let err = verify_location(Path::new("/a/old"), Path::new("/a/new")).unwrap_err();

        match &err {
            VenvError::EnvironmentMoved { recorded, expected } => {
                assert_eq!(recorded, Path::new("/a/old"));
                assert_eq!(expected, Path::new("/a/new"));
            }
            other => panic!("unexpected error: {other}"),
        }
        let msg = err.to_string();
        assert!(msg.contains("/a/old"));
        assert!(msg.contains("/a/new"));
    }

    #[test]
    fn location_comparison_is_normalized() {
        verify_location(Path::new("/a/new/"), Path::new("/a/./x/../new")).unwrap();
    }

    #[test]
    fn check_passes_for_matching_root() {
        let fixture = Fixture::linux();
        fixture.write_activate(&fixture.ctx.paths.root);
        let mut runner = MockRunner::new();
        let mut ui = MockUI::new();

        fixture.manager(&mut runner, &mut ui).check().unwrap();

        assert!(runner.invocations().is_empty());
    }

    #[test]
    fn check_detects_relocated_environment() {
        let fixture = Fixture::linux();
        let old = fixture.ctx.paths.project_root.join("old");
        fixture.write_activate(&old);
        let mut runner = MockRunner::new();
        let mut ui = MockUI::new();

        let err = fixture.manager(&mut runner, &mut ui).check().unwrap_err();

        match err {
            VenvError::EnvironmentMoved { recorded, expected } => {
                assert_eq!(recorded, old);
                assert_eq!(expected, fixture.ctx.paths.root);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn check_reports_missing_assignment() {
        let fixture = Fixture::linux();
        fixture.write_activate_script("export PATH\n");
        let mut runner = MockRunner::new();
        let mut ui = MockUI::new();

        let err = fixture.manager(&mut runner, &mut ui).check().unwrap_err();

        assert!(matches!(err, VenvError::AssignmentNotFound { .. }));
    }

    #[test]
    fn check_without_activate_script_names_file() {
        let fixture = Fixture::linux();
        let mut runner = MockRunner::new();
        let mut ui = MockUI::new();

        let err = fixture.manager(&mut runner, &mut ui).check().unwrap_err();

        assert!(err.to_string().contains("activate"));
    }

    fn with_required(executables: &[&str]) -> Fixture {
        let config = ProjectConfig {
            required_executables: executables.iter().map(PathBuf::from).collect(),
            ..Default::default()
        };
        let fixture = Fixture::with_config(config, Platform::Linux);
        fixture.write_activate(&fixture.ctx.paths.root);
        fixture
    }

    #[test]
    fn required_executables_are_probed() {
        let fixture = with_required(&["epyq"]);
        let mut runner = MockRunner::new();
        let mut ui = MockUI::new();

        fixture.manager(&mut runner, &mut ui).check().unwrap();

        assert_eq!(
            runner.invocations()[0].program,
            fixture.ctx.paths.tool("epyq")
        );
    }

    #[test]
    fn missing_executable_is_reported() {
        let fixture = with_required(&["epyq"]);
        let mut runner = MockRunner::new();
        runner.fail_launch("epyq", io::ErrorKind::NotFound);
        let mut ui = MockUI::new();

        let err = fixture.manager(&mut runner, &mut ui).check().unwrap_err();

        assert!(matches!(err, VenvError::ExecutableNotFound { .. }));
    }

    #[test]
    fn unrunnable_executable_is_reported() {
        let fixture = with_required(&["epyq"]);
        let mut runner = MockRunner::new();
        runner.fail_launch("epyq", io::ErrorKind::PermissionDenied);
        let mut ui = MockUI::new();

        let err = fixture.manager(&mut runner, &mut ui).check().unwrap_err();

        assert!(matches!(err, VenvError::ExecutableNotRunnable { .. }));
    }

    #[test]
    fn failing_executable_is_a_tool_failure() {
        let fixture = with_required(&["epyq"]);
        let mut runner = MockRunner::new();
        runner.fail_on("epyq", 3);
        let mut ui = MockUI::new();

        let err = fixture.manager(&mut runner, &mut ui).check().unwrap_err();

        assert!(matches!(
            err,
            VenvError::ToolInvocationFailed { code: Some(3), .. }
        ));
    }
}
