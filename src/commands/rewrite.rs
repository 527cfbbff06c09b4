//! Rewrite command implementation
//!
//! Writes the override and leaves it, with its backup, on disk. The
//! resolved dependency type restriction is printed to stdout.

use crate::cli::RewriteArgs;
use crate::commands::helpers::{GlobalOptions, prepare};
use crate::error::Result;
use crate::operations;

/// Run rewrite command
pub fn run(options: &GlobalOptions, args: RewriteArgs) -> Result<()> {
    let setup = prepare(options, &args.deny)?;
    let session = operations::rewrite_config(&setup.workspace, &setup.context())?;
    let restriction = session.restriction();

    if args.permanent {
        let npmrc = session.npmrc().to_path_buf();
        session.discard_backup()?;
        eprintln!("Wrote {}", npmrc.display());
    } else {
        let persisted = session.persist();
        eprintln!(
            "Wrote {} (original saved as {}). Run 'rcwrap restore' when done.",
            persisted.original.display(),
            persisted.saved.display()
        );
    }

    println!("{restriction}");
    Ok(())
}
