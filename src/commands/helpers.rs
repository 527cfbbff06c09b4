//! Command helper utilities

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::auth::TokenAuth;
use crate::error::{Result, fs};
use crate::npm::NpmCli;
use crate::npmrc::AllowList;
use crate::settings::Settings;

/// Options shared by every command
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub workspace: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub npm: Option<PathBuf>,
}

/// Everything a rewrite needs, resolved from settings and CLI options
#[derive(Debug)]
pub struct RewriteSetup {
    pub workspace: PathBuf,
    pub npm: NpmCli,
    pub auth: TokenAuth,
    pub keys: AllowList,
}

/// Resolve workspace path from optional argument
///
/// If a workspace path is provided, use it. Otherwise,
/// resolve to the current directory.
pub fn resolve_workspace_path(workspace: Option<&Path>) -> Result<PathBuf> {
    let path = match workspace {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()
            .map_err(|e| fs::io_error(format!("Failed to get current directory: {e}")))?,
    };
    dunce::canonicalize(&path).map_err(|e| fs::read_failed(&path, e))
}

/// Load settings and build the collaborators for a rewrite
pub fn prepare(options: &GlobalOptions, extra_denied: &[String]) -> Result<RewriteSetup> {
    let workspace = resolve_workspace_path(options.workspace.as_deref())?;
    debug!(workspace = %workspace.display(), "resolved workspace");

    let settings = Settings::load(options.config.as_deref(), &workspace)?;

    let npm = options
        .npm
        .clone()
        .or_else(|| settings.npm.clone())
        .map_or_else(NpmCli::default, NpmCli::new)
        .in_dir(&workspace);
    debug!(npm = %npm.program().display(), "using npm");

    let keys = AllowList::new()
        .with_denied(settings.deny_keys.iter().cloned())
        .with_denied(extra_denied.iter().cloned());

    Ok(RewriteSetup {
        auth: TokenAuth::from_settings(&settings)?,
        workspace,
        npm,
        keys,
    })
}

impl RewriteSetup {
    pub fn context(&self) -> crate::operations::RewriteContext<'_> {
        crate::operations::RewriteContext {
            npm: &self.npm,
            auth: &self.auth,
            keys: &self.keys,
        }
    }
}
