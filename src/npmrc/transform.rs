//! Rendering parsed entries into override lines

use super::entry::{ConfigEntry, EntryKind};

/// Render entries, in order, into the lines carried into the override
///
/// Scoped registries are pointed at `registry`, arrays are expanded and
/// invalid entries are dropped.
pub fn render_lines<'e, 'a: 'e, I>(entries: I, registry: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'e ConfigEntry<'a>>,
{
    let mut lines = Vec::new();
    for entry in entries {
        match entry.kind {
            EntryKind::Scalar => lines.push(entry.line.to_string()),
            EntryKind::ArrayValued => lines.extend(expand_array(entry.key, entry.raw_value)),
            EntryKind::ScopedRegistry => lines.push(format!("{} = {registry}", entry.key)),
            EntryKind::Invalid => {}
        }
    }
    lines
}

/// Expand `[a, b]` into `key[] = a`, `key[] = b`
///
/// An empty array yields nothing.
pub fn expand_array<'v>(key: &'v str, value: &'v str) -> impl Iterator<Item = String> + 'v {
    let inner = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .unwrap_or(value);

    split_elements(inner)
        .into_iter()
        .map(str::trim)
        .filter(|element| !element.is_empty())
        .map(move |element| format!("{key}[] = {element}"))
}

/// Split on commas outside double-quoted strings
fn split_elements(inner: &str) -> Vec<&str> {
    let mut elements = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut escaped = false;

    for (i, c) in inner.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                elements.push(&inner[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    elements.push(&inner[start..]);
    elements
}
