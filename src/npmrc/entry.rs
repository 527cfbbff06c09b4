//! Line classification for `npm config list` output

use super::keys::KeyFilter;

/// How a configuration line is treated when building the override
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// `key = value`, copied verbatim
    Scalar,
    /// `key = [a, b]`, expanded into repeated `key[] = a` assignments
    ArrayValued,
    /// `@scope... = url`, pointed at the authenticated registry
    ScopedRegistry,
    /// Missing `=` or a key that must not be persisted
    Invalid,
}

/// A single parsed line, borrowing from the raw configuration text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry<'a> {
    pub key: &'a str,
    pub raw_value: &'a str,
    pub kind: EntryKind,
    /// The untouched source line
    pub line: &'a str,
}

impl<'a> ConfigEntry<'a> {
    /// The (key, value) pair that takes part in type restriction resolution
    pub fn policy_pair(&self) -> Option<(&'a str, &'a str)> {
        match self.kind {
            EntryKind::Scalar | EntryKind::ArrayValued => Some((self.key, self.raw_value)),
            EntryKind::ScopedRegistry | EntryKind::Invalid => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.kind != EntryKind::Invalid
    }
}

/// Classify a single non-empty line
pub fn classify<'a>(line: &'a str, filter: &dyn KeyFilter) -> ConfigEntry<'a> {
    let Some((left, right)) = line.split_once('=') else {
        return ConfigEntry {
            key: line.trim(),
            raw_value: "",
            kind: EntryKind::Invalid,
            line,
        };
    };

    let key = left.trim();
    let raw_value = right.trim();

    let kind = if key.starts_with('@') {
        EntryKind::ScopedRegistry
    } else if !filter.is_recognized(key) {
        EntryKind::Invalid
    } else if raw_value.starts_with('[') && raw_value.ends_with(']') {
        EntryKind::ArrayValued
    } else {
        EntryKind::Scalar
    };

    ConfigEntry {
        key,
        raw_value,
        kind,
        line,
    }
}

/// Lazily parse the configuration dump into entries, skipping blank lines
pub fn parse_entries<'a>(
    text: &'a str,
    filter: &'a dyn KeyFilter,
) -> impl Iterator<Item = ConfigEntry<'a>> + 'a {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(move |line| classify(line, filter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::npmrc::keys::AllowList;

    #[test]
    fn test_classify_scalar() {
        let entry = classify("save-exact = true", &AllowList::new());
        assert_eq!(entry.kind, EntryKind::Scalar);
        assert_eq!(entry.key, "save-exact");
        assert_eq!(entry.raw_value, "true");
    }

    #[test]
    fn test_classify_splits_on_first_equals_only() {
        let entry = classify("init-author-url = https://x.test/?a=b", &AllowList::new());
        assert_eq!(entry.key, "init-author-url");
        assert_eq!(entry.raw_value, "https://x.test/?a=b");
    }

    #[test]
    fn test_classify_array() {
        let entry = classify("omit = [\"dev\"]", &AllowList::new());
        assert_eq!(entry.kind, EntryKind::ArrayValued);
        assert_eq!(entry.raw_value, "[\"dev\"]");
    }

    #[test]
    fn test_classify_scoped_registry_bypasses_filter() {
        let deny_all = |_: &str| false;
        let entry = classify("@myscope:registry = https://old", &deny_all);
        assert_eq!(entry.kind, EntryKind::ScopedRegistry);
        assert_eq!(entry.key, "@myscope:registry");
    }

    #[test]
    fn test_classify_without_equals_is_invalid() {
        let entry = classify("; end of config", &AllowList::new());
        assert_eq!(entry.kind, EntryKind::Invalid);
        assert!(entry.policy_pair().is_none());
    }

    #[test]
    fn test_classify_unrecognized_key_is_invalid() {
        let entry = classify("//registry.npmjs.org/:_authToken = abc", &AllowList::new());
        assert_eq!(entry.kind, EntryKind::Invalid);
        assert!(!entry.is_valid());
    }

    #[test]
    fn test_parse_entries_skips_blank_lines_and_keeps_order() {
        let filter = AllowList::new();
        let text = "a = 1\n\n   \nb = [x]\n@s = y\n";
        let kinds: Vec<_> = parse_entries(text, &filter).map(|e| (e.key, e.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                ("a", EntryKind::Scalar),
                ("b", EntryKind::ArrayValued),
                ("@s", EntryKind::ScopedRegistry),
            ]
        );
    }

    #[test]
    fn test_parse_entries_handles_crlf() {
        let filter = AllowList::new();
        let entries: Vec<_> = parse_entries("a = 1\r\nb = 2\r\n", &filter).collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].raw_value, "1");
    }
}
