//! Run command implementation
//!
//! Runs npm with the override in place. The original .npmrc is restored
//! before rcwrap exits, whatever npm's outcome.

use tracing::info;

use crate::cli::RunArgs;
use crate::commands::helpers::{GlobalOptions, prepare};
use crate::error::Result;
use crate::operations;

/// Run npm through the override, returning npm's exit code
pub fn run(options: &GlobalOptions, args: RunArgs) -> Result<i32> {
    let setup = prepare(options, &args.deny)?;

    let status = operations::with_override(&setup.workspace, &setup.context(), |restriction| {
        info!(%restriction, args = ?args.args, "running npm");
        setup.npm.run(&setup.workspace, &args.args)
    })?;

    Ok(status.code().unwrap_or(1))
}
