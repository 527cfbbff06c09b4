//! Command implementations for rcwrap CLI

pub mod completions;
pub mod helpers;
pub mod restore;
pub mod rewrite;
pub mod run;
pub mod version;
