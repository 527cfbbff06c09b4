//! Rewriting the project `.npmrc` to use the authenticated registry
//!
//! The rewrite process:
//! 1. Resolve registry credentials
//! 2. Back up the project `.npmrc`
//! 3. Fetch `npm config list` and the JSON output setting
//! 4. Transform the dump and infer the dependency type restriction
//! 5. Write the override atomically
//!
//! Any failure after step 2 restores the original before the error is
//! returned. If that restore fails as well, both errors are reported.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::auth::{Credentials, RegistryAuth};
use crate::backup::{self, BackupHandle, NPMRC_FILE_NAME, PersistedBackup};
use crate::error::{RcwrapError, Result, fs as fs_error};
use crate::npm::{self, NpmClient};
use crate::npmrc::{self, KeyFilter, OverrideConfig, TypeRestriction};

/// External collaborators of a rewrite
pub struct RewriteContext<'a> {
    pub npm: &'a dyn NpmClient,
    pub auth: &'a dyn RegistryAuth,
    pub keys: &'a dyn KeyFilter,
}

/// A written override whose original is still owed a restore
///
/// Dropping the session restores the original.
#[derive(Debug)]
#[must_use = "dropping an OverrideSession restores the original .npmrc immediately"]
pub struct OverrideSession {
    backup: BackupHandle,
    restriction: TypeRestriction,
}

impl OverrideSession {
    /// Dependency type restriction inferred from npm's configuration
    pub fn restriction(&self) -> TypeRestriction {
        self.restriction
    }

    /// Path of the override file
    pub fn npmrc(&self) -> &Path {
        self.backup.original()
    }

    /// Put the project's original `.npmrc` back
    pub fn restore(self) -> Result<()> {
        self.backup.restore()
    }

    /// Keep the override for good; the original is gone afterwards
    pub fn discard_backup(self) -> Result<()> {
        self.backup.discard()
    }

    /// Leave the override in place; [`restore_original_config`] undoes it later
    pub fn persist(self) -> PersistedBackup {
        self.backup.persist()
    }
}

/// Point the `.npmrc` in `dir` at the authenticated registry
pub fn rewrite_config(dir: &Path, ctx: &RewriteContext<'_>) -> Result<OverrideSession> {
    rewrite_config_with(dir, ctx, write_atomically)
}

/// Restore the `.npmrc` in `dir` after [`rewrite_config`]
///
/// A no-op when the rewrite already restored it; returns whether anything
/// was restored.
pub fn restore_original_config(dir: &Path) -> Result<bool> {
    let restored = backup::restore_original_config(dir)?;
    if !restored {
        debug!(dir = %dir.display(), "nothing to restore");
    }
    Ok(restored)
}

/// Rewrite, run `f` with the inferred restriction, then always restore
pub fn with_override<T>(
    dir: &Path,
    ctx: &RewriteContext<'_>,
    f: impl FnOnce(TypeRestriction) -> Result<T>,
) -> Result<T> {
    let session = rewrite_config(dir, ctx)?;
    let result = f(session.restriction());

    match (result, session.restore()) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(restore)) => Err(restore),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(restore)) => Err(err.with_restore_failure(restore)),
    }
}

pub(crate) fn rewrite_config_with(
    dir: &Path,
    ctx: &RewriteContext<'_>,
    persist: impl FnOnce(&Path, &[u8]) -> Result<()>,
) -> Result<OverrideSession> {
    let credentials = ctx.auth.authenticate()?;
    let npmrc = dir.join(NPMRC_FILE_NAME);

    let backup = BackupHandle::begin(&npmrc)?;

    let written = write_override(&npmrc, ctx, &credentials, persist);

    match written {
        Ok(restriction) => {
            info!(
                npmrc = %npmrc.display(),
                registry = %credentials.registry,
                had_original = backup.had_original(),
                %restriction,
                "project .npmrc points at authenticated registry"
            );
            Ok(OverrideSession {
                backup,
                restriction,
            })
        }
        Err(err) => Err(release_on_error(backup, err)),
    }
}

fn write_override(
    npmrc: &Path,
    ctx: &RewriteContext<'_>,
    credentials: &Credentials,
    persist: impl FnOnce(&Path, &[u8]) -> Result<()>,
) -> Result<TypeRestriction> {
    let raw = npmrc::decode(ctx.npm.config_list()?)?;
    let json = npm::resolve_json_flag(ctx.npm)?;

    let transformed = npmrc::transform(&raw, ctx.keys, &credentials.registry);
    debug!(
        kept = transformed.kept,
        rewritten = transformed.rewritten,
        dropped = transformed.dropped,
        "transformed npm configuration"
    );

    let config = OverrideConfig::compose(
        &transformed.lines,
        json,
        &credentials.registry,
        &credentials.credential_line,
    )?;
    persist(npmrc, config.as_bytes())?;
    Ok(transformed.restriction)
}

/// Restore after a failed rewrite, keeping the original error
fn release_on_error(backup: BackupHandle, err: RcwrapError) -> RcwrapError {
    match backup.restore() {
        Ok(()) => err,
        Err(restore) => err.with_restore_failure(restore),
    }
}

/// Replace `path` with `bytes` via a temporary file in the same directory
///
/// The temporary file is created owner-only (0600 on Unix), which the
/// override keeps since it carries a credential.
fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);

    let mut file = NamedTempFile::new_in(&dir).map_err(|e| fs_error::write_failed(path, e))?;
    file.write_all(bytes)
        .and_then(|()| file.as_file().sync_all())
        .map_err(|e| fs_error::write_failed(path, e))?;
    file.persist(path)
        .map_err(|e| fs_error::write_failed(path, e.error))?;
    Ok(())
}
