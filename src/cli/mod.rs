//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - rewrite: Rewrite command arguments
//! - run: Run command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod rewrite;
pub mod run;

pub use completions::CompletionsArgs;
pub use rewrite::RewriteArgs;
pub use run::RunArgs;

/// rcwrap - run npm against an authenticated registry
///
/// Writes a temporary project .npmrc pointing at the configured registry and
/// puts the original back afterwards.
#[derive(Parser, Debug)]
#[command(
    name = "rcwrap",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Point npm at an authenticated registry through a temporary project .npmrc",
    long_about = "rcwrap builds a project .npmrc from npm's own configuration, redirects the \
                  registry and every scoped registry to an authenticated registry, and restores \
                  the original .npmrc when done.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  rcwrap run -- install            \x1b[90m# npm install through the registry\x1b[0m\n   \
                  rcwrap run -- ci --ignore-scripts\x1b[90m# Any npm command works\x1b[0m\n   \
                  rcwrap rewrite                   \x1b[90m# Leave the override in place\x1b[0m\n   \
                  rcwrap restore                   \x1b[90m# Put the original .npmrc back\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project directory holding the .npmrc (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "RCWRAP_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Settings file (defaults to ./rcwrap.yaml, then the user configuration directory)
    #[arg(long, short = 'c', global = true, env = "RCWRAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// npm executable to use instead of the one in settings or on PATH
    #[arg(long, global = true, env = "RCWRAP_NPM")]
    pub npm: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the project .npmrc override and keep it until `restore`
    Rewrite(RewriteArgs),

    /// Put the original project .npmrc back
    Restore,

    /// Run an npm command with the override in place
    Run(RunArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
