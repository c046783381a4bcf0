//! Requirement synchronization.

use crate::error::Result;

use super::VenvManager;

/// Manifest installed on top of the pinned set, without dependency
/// resolution.
pub const LOCAL_MANIFEST: &str = "local.txt";

impl VenvManager<'_> {
    /// Make the installed packages match the platform's pinned `base`
    /// manifest exactly, then install the local manifest with `--no-deps`.
    pub fn sync_requirements(&mut self) -> Result<()> {
        let ctx = self.ctx;
        let paths = &ctx.paths;

        let sync = self
            .invocation(paths.tool("pip-sync"))
            .arg(ctx.compiled_manifest("base"));
        self.launch(&sync)?;

        let local = self
            .invocation(&paths.python)
            .args(["-m", "pip", "install", "--no-deps", "--requirement"])
            .arg(paths.requirements_file(LOCAL_MANIFEST));
        self.launch(&local)
    }
}
