//! Restore command implementation

use crate::commands::helpers::{GlobalOptions, resolve_workspace_path};
use crate::error::Result;
use crate::operations;

/// Run restore command
pub fn run(options: &GlobalOptions) -> Result<()> {
    let workspace = resolve_workspace_path(options.workspace.as_deref())?;
    if operations::restore_original_config(&workspace)? {
        println!("Project .npmrc in {} is back to its original state", workspace.display());
    } else {
        println!("Nothing to restore in {}", workspace.display());
    }
    Ok(())
}
