//! Backup and restore of the project `.npmrc`
//!
//! Before rcwrap writes its override, the project's own file is copied next
//! to it. A [`BackupHandle`] owns that copy and guarantees it is resolved
//! exactly once: restored, discarded or persisted for a later
//! [`restore_original_config`] run.
//!
//! ## Usage
//!
//! ```ignore
//! let backup = BackupHandle::begin(&npmrc)?;
//!
//! // Write the override, run npm...
//!
//! // Put the original back:
//! backup.restore()?;
//!
//! // On early return the original is restored automatically via Drop
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{RcwrapError, Result, fs as fs_error};
use crate::hash;

/// Name of the project configuration file npm reads
pub const NPMRC_FILE_NAME: &str = ".npmrc";

/// Name of the backup copy for `file_name`
///
/// The `rcwrap.` prefix keeps the name away from anything npm reads.
pub fn backup_file_name(file_name: &str) -> String {
    format!("rcwrap.{}.backup", file_name.trim_start_matches('.'))
}

/// Name of the marker recording that `file_name` did not exist
pub fn absent_marker_name(file_name: &str) -> String {
    format!("rcwrap.{}.absent", file_name.trim_start_matches('.'))
}

/// What was saved for the original file
#[derive(Debug, Clone)]
enum Saved {
    /// The original existed and was copied to `path`
    Copy { path: PathBuf, digest: String },
    /// The original did not exist; `marker` records that on disk
    Absent { marker: PathBuf },
}

/// Paths that stay on disk after [`BackupHandle::persist`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedBackup {
    pub original: PathBuf,
    /// Backup copy or absent-marker
    pub saved: PathBuf,
}

/// A saved copy of a file about to be overwritten
#[derive(Debug)]
#[must_use = "dropping a BackupHandle restores the original file immediately"]
pub struct BackupHandle {
    original: PathBuf,
    saved: Saved,
    resolved: bool,
}

impl BackupHandle {
    /// Save `original` before it is overwritten
    ///
    /// A missing original is not an error: the handle then restores by
    /// removing whatever was written in its place. Refuses to start while a
    /// backup from an earlier run is still on disk.
    pub fn begin(original: impl Into<PathBuf>) -> Result<Self> {
        let original = original.into();
        let (backup, marker) = saved_paths(&original)?;

        if backup.exists() || marker.exists() {
            return Err(fs_error::backup_failed(
                &original,
                "a backup from a previous run exists; run 'rcwrap restore' first",
            ));
        }

        let saved = match fs::read(&original) {
            Ok(content) => {
                fs::copy(&original, &backup).map_err(|e| fs_error::backup_failed(&original, e))?;
                debug!(original = %original.display(), backup = %backup.display(), "backed up");
                Saved::Copy {
                    path: backup,
                    digest: hash::hash_bytes(&content),
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                fs::write(&marker, b"").map_err(|e| fs_error::backup_failed(&original, e))?;
                debug!(original = %original.display(), "nothing to back up");
                Saved::Absent { marker }
            }
            Err(e) => return Err(fs_error::read_failed(&original, e)),
        };

        Ok(Self {
            original,
            saved,
            resolved: false,
        })
    }

    /// Path of the file being protected
    pub fn original(&self) -> &Path {
        &self.original
    }

    /// Whether the original file existed when the backup was taken
    pub fn had_original(&self) -> bool {
        matches!(self.saved, Saved::Copy { .. })
    }

    /// Delete the current file and put the original back
    ///
    /// Safe to call when nothing was written over the original. The restored
    /// content is checked against the digest taken when the backup was made.
    pub fn restore(mut self) -> Result<()> {
        self.resolved = true;
        self.restore_saved()
    }

    /// Keep the current file and delete the backup
    pub fn discard(mut self) -> Result<()> {
        self.resolved = true;
        let saved = match &self.saved {
            Saved::Copy { path, .. } => path,
            Saved::Absent { marker } => marker,
        };
        remove_if_exists(saved).map_err(|e| fs_error::io_error(e.to_string()))?;
        debug!(original = %self.original.display(), "backup discarded");
        Ok(())
    }

    /// Leave the backup on disk for a later [`restore_original_config`]
    pub fn persist(mut self) -> PersistedBackup {
        self.resolved = true;
        let saved = match &self.saved {
            Saved::Copy { path, .. } => path.clone(),
            Saved::Absent { marker } => marker.clone(),
        };
        PersistedBackup {
            original: self.original.clone(),
            saved,
        }
    }

    fn restore_saved(&self) -> Result<()> {
        remove_if_exists(&self.original).map_err(|e| fs_error::restore_failed(&self.original, e))?;

        match &self.saved {
            Saved::Copy { path, digest } => {
                fs::rename(path, &self.original)
                    .map_err(|e| fs_error::restore_failed(&self.original, e))?;
                if hash::hash_file(&self.original)? != *digest {
                    return Err(RcwrapError::RestoreMismatch {
                        path: self.original.display().to_string(),
                    });
                }
            }
            Saved::Absent { marker } => {
                remove_if_exists(marker).map_err(|e| fs_error::restore_failed(&self.original, e))?;
            }
        }

        debug!(original = %self.original.display(), "restored");
        Ok(())
    }
}

impl Drop for BackupHandle {
    fn drop(&mut self) {
        if !self.resolved {
            debug!(original = %self.original.display(), "restoring on drop");
            if let Err(e) = self.restore_saved() {
                warn!(original = %self.original.display(), "automatic restore failed: {e}");
            }
        }
    }
}

/// Restore the project `.npmrc` in `dir` from a backup left on disk
///
/// Returns `false` when there was nothing to restore.
pub fn restore_original_config(dir: &Path) -> Result<bool> {
    let original = dir.join(NPMRC_FILE_NAME);
    let (backup, marker) = saved_paths(&original)?;

    if backup.exists() {
        remove_if_exists(&original).map_err(|e| fs_error::restore_failed(&original, e))?;
        fs::rename(&backup, &original).map_err(|e| fs_error::restore_failed(&original, e))?;
        debug!(original = %original.display(), "restored from backup");
        Ok(true)
    } else if marker.exists() {
        remove_if_exists(&original).map_err(|e| fs_error::restore_failed(&original, e))?;
        remove_if_exists(&marker).map_err(|e| fs_error::restore_failed(&original, e))?;
        debug!(original = %original.display(), "removed override, no original existed");
        Ok(true)
    } else {
        debug!(dir = %dir.display(), "no backup to restore");
        Ok(false)
    }
}

fn saved_paths(original: &Path) -> Result<(PathBuf, PathBuf)> {
    let file_name = original
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| fs_error::backup_failed(original, "not a file path"))?;
    let dir = original.parent().unwrap_or_else(|| Path::new(""));

    Ok((
        dir.join(backup_file_name(file_name)),
        dir.join(absent_marker_name(file_name)),
    ))
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}
