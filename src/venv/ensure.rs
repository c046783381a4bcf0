//! Create-or-verify.

use crate::error::Result;

use super::VenvManager;

/// What [`VenvManager::ensure`] found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnsureOutcome {
    /// The environment did not exist and was created.
    Created,
    /// The environment already existed.
    AlreadyPresent,
}

impl EnsureOutcome {
    /// Message reported after a successful ensure.
    pub fn message(&self) -> &'static str {
        match self {
            EnsureOutcome::Created => "venv created and passed some basic checks",
            EnsureOutcome::AlreadyPresent => {
                "venv already present and passes some basic checks"
            }
        }
    }
}

impl VenvManager<'_> {
    /// Create the environment if needed, otherwise re-sync it unless
    /// `quick` is set. Always finishes with [`check`](Self::check).
    ///
    /// With `quick`, existence alone is taken as up to date; manifest drift
    /// is not detected.
    pub fn ensure(&mut self, quick: bool) -> Result<EnsureOutcome> {
        let existed = self.ctx.paths.venv_exists();

        if !existed {
            self.create(false)?;
        } else if !quick {
            self.sync_requirements()?;
        } else {
            tracing::debug!("Quick ensure: {} exists", self.ctx.paths.root.display());
        }

        self.check()?;

        Ok(if existed {
            EnsureOutcome::AlreadyPresent
        } else {
            EnsureOutcome::Created
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::Fixture;
    use super::*;
    use crate::error::VenvError;
    use crate::shell::MockRunner;
    use crate::ui::MockUI;

    #[cfg(unix)]
    #[test]
    fn fresh_ensure_creates_and_passes_check() {
        let fixture = Fixture::linux();
        let mut runner = fixture.venv_runner();
        let mut ui = MockUI::new();

        let outcome = fixture.manager(&mut runner, &mut ui).ensure(false).unwrap();

        assert_eq!(outcome, EnsureOutcome::Created);
        assert!(fixture.ctx.paths.root.exists());
        assert_eq!(runner.invocations_of("pip-sync").len(), 1);

        let mut ui = MockUI::new();
        fixture.manager(&mut runner, &mut ui).check().unwrap();
    }

    #[test]
    fn quick_ensure_skips_sync_but_checks() {
        let fixture = Fixture::linux();
        fixture.write_activate(&fixture.ctx.paths.root);
        let mut runner = MockRunner::new();
        let mut ui = MockUI::new();

        let outcome = fixture.manager(&mut runner, &mut ui).ensure(true).unwrap();

        assert_eq!(outcome, EnsureOutcome::AlreadyPresent);
        assert!(runner.invocations().is_empty());
    }

    #[test]
    fn quick_ensure_still_detects_moved_environment() {
        let fixture = Fixture::linux();
        let elsewhere = fixture.ctx.paths.project_root.join("old-venv");
        fixture.write_activate(&elsewhere);
        let mut runner = MockRunner::new();
        let mut ui = MockUI::new();

        let err = fixture.manager(&mut runner, &mut ui).ensure(true).unwrap_err();

        assert!(matches!(err, VenvError::EnvironmentMoved { .. }));
    }

    #[test]
    fn full_ensure_on_existing_environment_resyncs() {
        let fixture = Fixture::linux();
        fixture.write_activate(&fixture.ctx.paths.root);
        let mut runner = MockRunner::new();
        let mut ui = MockUI::new();

        let outcome = fixture.manager(&mut runner, &mut ui).ensure(false).unwrap();

        assert_eq!(outcome, EnsureOutcome::AlreadyPresent);
        assert_eq!(runner.programs(), vec!["pip-sync", "python"]);
    }

    #[test]
    fn outcome_messages() {
        assert!(EnsureOutcome::Created.message().starts_with("venv created"));
        assert!(EnsureOutcome::AlreadyPresent
            .message()
            .starts_with("venv already present"));
    }
}
