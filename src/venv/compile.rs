//! Manifest compilation.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::error::Result;

use super::VenvManager;

/// Extension of abstract requirement sources.
pub const SOURCE_EXTENSION: &str = "in";

impl VenvManager<'_> {
    /// Compile every `*.in` source into a pinned manifest for this
    /// platform.
    ///
    /// Creates a bootstrap-only environment first when none exists. Stops
    /// at the first failing source; manifests written before it are kept.
    /// Returns the manifests written.
    pub fn compile(&mut self) -> Result<Vec<PathBuf>> {
        let ctx = self.ctx;
        let paths = &ctx.paths;

        if !paths.venv_exists() {
            self.ui
                .message("No venv present, creating one with the pre requirements only");
            self.create(true)?;
        }

        let sources = find_requirement_sources(&paths.requirements)?;
        if sources.is_empty() {
            self.ui.warning(&format!(
                "No *.{} files found in {}",
                SOURCE_EXTENSION,
                paths.requirements.display()
            ));
        }

        let mut written = Vec::with_capacity(sources.len());
        for source in sources {
            let output = compiled_output_path(&source, ctx.profile.requirements_suffix);
            let compile = self
                .invocation(paths.tool("pip-compile"))
                .arg("--output-file")
                .arg(&output)
                .arg(&source);
            self.launch(&compile)?;
            written.push(output);
        }

        tracing::debug!("Compiled {} manifest(s)", written.len());
        Ok(written)
    }
}

/// All `*.in` files directly inside `dir`, sorted by path.
///
/// A missing directory yields no sources.
pub fn find_requirement_sources(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = format!(
        "{}/*.{}",
        glob::Pattern::escape(&dir.to_string_lossy()),
        SOURCE_EXTENSION
    );

    let mut sources = glob::glob(&pattern)
        .with_context(|| format!("invalid requirements pattern {}", pattern))?
        .collect::<std::result::Result<Vec<_>, glob::GlobError>>()
        .map_err(glob::GlobError::into_error)?;
    sources.retain(|p| p.is_file());
    sources.sort();
    Ok(sources)
}

/// Pinned manifest written for `source` (`<dir>/<stem>.<suffix>.txt`).
pub fn compiled_output_path(source: &Path, suffix: &str) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    source.with_file_name(format!("{}.{}.txt", stem, suffix))
}
