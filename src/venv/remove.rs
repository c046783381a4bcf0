//! Environment removal.

use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use anyhow::anyhow;

use crate::error::{Result, VenvError};
use crate::retry::RetryPolicy;

use super::VenvManager;

/// Default policy for removing the environment root: four attempts, half a
/// second apart.
pub const REMOVAL_POLICY: RetryPolicy = RetryPolicy::new(4, Duration::from_millis(500));

impl VenvManager<'_> {
    /// Delete the environment root and everything under it.
    ///
    /// A missing root is an error unless `ignore_missing` is set. Other
    /// failures are retried according to the removal policy.
    pub fn remove(&mut self, ignore_missing: bool) -> Result<()> {
        self.ctx.config.validate().map_err(|message| anyhow!(message))?;

        self.remove_using(ignore_missing, |root| {
            remove_tree(root, &mut clear_readonly_and_retry)
        })
    }

    fn remove_using<F>(&mut self, ignore_missing: bool, mut remove: F) -> Result<()>
    where
        F: FnMut(&Path) -> io::Result<()>,
    {
        let ctx = self.ctx;
        let root = &ctx.paths.root;
        let policy = self.removal;
        let ui = &mut *self.ui;

        let result = policy.run(
            |attempt| {
                tracing::debug!("Removing {} (attempt {})", root.display(), attempt);
                remove(root)
            },
            |e: &io::Error| e.kind() != io::ErrorKind::NotFound,
            |remaining, e| {
                tracing::debug!("Failed to remove {}: {}", root.display(), e);
                ui.warning(&format!("{remaining} remaining removal attempts"));
            },
        );

        match result {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                if ignore_missing {
                    tracing::debug!("Nothing to remove at {}", root.display());
                    Ok(())
                } else {
                    Err(VenvError::NotFound { path: root.clone() })
                }
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Recursively delete `root` without following symlinks.
///
/// A missing `root` is reported as `NotFound`. Entries below it that vanish
/// while the walk is running are ignored. When deleting a single entry
/// fails, `on_error` gets the path and the error and may recover by
/// removing the entry itself; whatever it returns is final for that entry.
pub fn remove_tree<F>(root: &Path, on_error: &mut F) -> io::Result<()>
where
    F: FnMut(&Path, io::Error) -> io::Result<()>,
{
    let meta = fs::symlink_metadata(root)?;

    if meta.is_dir() {
        for entry in fs::read_dir(root)? {
            let path = entry?.path();
            match remove_tree(&path, on_error) {
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                other => other?,
            }
        }
    }

    match remove_entry(root, &meta) {
        Ok(()) => Ok(()),
        Err(e) => on_error(root, e),
    }
}

/// Make `path` and its parent writable, then delete `path` once more.
///
/// Only permission errors are handled; anything else is returned as is.
pub fn clear_readonly_and_retry(path: &Path, err: io::Error) -> io::Result<()> {
    if err.kind() != io::ErrorKind::PermissionDenied {
        return Err(err);
    }

    let meta = fs::symlink_metadata(path)?;
    if !meta.file_type().is_symlink() {
        make_writable(path, &meta)?;
    }
    if let Some(parent) = path.parent() {
        if let Ok(parent_meta) = fs::metadata(parent) {
            make_writable(parent, &parent_meta)?;
        }
    }

    tracing::debug!("Cleared read-only flag on {}", path.display());
    remove_entry(path, &meta)
}

fn remove_entry(path: &Path, meta: &fs::Metadata) -> io::Result<()> {
    if is_directory_entry(meta) {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    }
}

#[cfg(windows)]
fn is_directory_entry(meta: &fs::Metadata) -> bool {
    use std::os::windows::fs::FileTypeExt;
    meta.is_dir() || meta.file_type().is_symlink_dir()
}

#[cfg(not(windows))]
fn is_directory_entry(meta: &fs::Metadata) -> bool {
    meta.is_dir()
}

#[cfg(unix)]
fn make_writable(path: &Path, meta: &fs::Metadata) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = meta.permissions();
    perms.set_mode(perms.mode() | 0o200);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn make_writable(path: &Path, meta: &fs::Metadata) -> io::Result<()> {
    let mut perms = meta.permissions();
    #[allow(clippy::permissions_set_readonly_false)]
    perms.set_readonly(false);
    fs::set_permissions(path, perms)
}
