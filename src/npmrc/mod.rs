//! Building a project `.npmrc` from `npm config list` output
//!
//! The dump is parsed line by line into [`ConfigEntry`] values. Two
//! independent passes run over the same entries:
//! - [`render_lines`] produces the lines carried into the override
//! - [`TypeRestriction::resolve`] infers the dependency type restriction
//!
//! [`OverrideConfig`] then appends the settings rcwrap always controls.

pub mod entry;
pub mod keys;
pub mod restriction;
pub mod transform;
pub mod writer;

pub use entry::{ConfigEntry, parse_entries};
pub use keys::{AllowList, KeyFilter};
pub use restriction::TypeRestriction;
pub use transform::render_lines;
pub use writer::OverrideConfig;

use crate::error::{Result, config};
use entry::EntryKind;

/// Outcome of transforming one configuration dump
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    pub lines: Vec<String>,
    pub restriction: TypeRestriction,
    /// Source entries that were carried over or rewritten
    pub kept: usize,
    /// Scoped registries pointed at the authenticated registry
    pub rewritten: usize,
    /// Source entries that were dropped
    pub dropped: usize,
}

/// Transform a configuration dump for use with `registry`
pub fn transform(text: &str, filter: &dyn KeyFilter, registry: &str) -> Transformed {
    let entries: Vec<ConfigEntry<'_>> = parse_entries(text, filter).collect();

    let lines = render_lines(&entries, registry);
    let restriction =
        TypeRestriction::resolve(entries.iter().filter_map(ConfigEntry::policy_pair));
    let kept = entries.iter().filter(|e| e.is_valid()).count();
    let rewritten = entries
        .iter()
        .filter(|e| e.kind == EntryKind::ScopedRegistry)
        .count();

    Transformed {
        lines,
        restriction,
        kept,
        rewritten,
        dropped: entries.len() - kept,
    }
}

/// Decode raw `npm config list` output
pub fn decode(raw: Vec<u8>) -> Result<String> {
    String::from_utf8(raw).map_err(config::invalid_encoding)
}
