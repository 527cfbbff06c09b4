//! rcwrap - run npm against an authenticated registry
//!
//! Builds a project-local .npmrc from npm's own configuration, redirects the
//! registry and every scoped registry to an authenticated registry, and puts
//! the original .npmrc back afterwards.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod auth;
mod backup;
mod cli;
mod commands;
mod error;
mod hash;
mod npm;
mod npmrc;
mod operations;
mod settings;
#[cfg(test)]
mod temp;

use cli::{Cli, Commands};
use commands::helpers::GlobalOptions;

/// Log to stderr; `RUST_LOG` takes precedence over `--verbose`
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = GlobalOptions {
        workspace: cli.workspace,
        config: cli.config,
        npm: cli.npm,
    };

    let result = match cli.command {
        Commands::Rewrite(args) => commands::rewrite::run(&options, args).map(|()| 0),
        Commands::Restore => commands::restore::run(&options).map(|()| 0),
        Commands::Run(args) => commands::run::run(&options, args),
        Commands::Version => commands::version::run().map(|()| 0),
        Commands::Completions(args) => commands::completions::run(&args).map(|()| 0),
    };

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            tracing::debug!(kind = ?e.kind(), "command failed");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
