//! Allow-list for keys that may be persisted into the project override
//!
//! `npm config list` reports everything npm knows about, including
//! credentials for other hosts, comment lines and the keys rcwrap writes
//! itself. Only keys accepted by a [`KeyFilter`] are carried over.

use std::collections::HashSet;

/// Keys that rcwrap synthesizes or that must never be copied verbatim
const RESERVED_KEYS: [&str; 3] = ["registry", "metrics-registry", "json"];

/// Decides whether a configuration key is safe to persist
pub trait KeyFilter {
    fn is_recognized(&self, key: &str) -> bool;
}

/// Default npm allow-list, optionally extended with extra denied keys
#[derive(Debug, Clone, Default)]
pub struct AllowList {
    denied: HashSet<String>,
}

impl AllowList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also reject the given keys
    pub fn with_denied<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.denied.extend(keys.into_iter().map(Into::into));
        self
    }
}

impl KeyFilter for AllowList {
    fn is_recognized(&self, key: &str) -> bool {
        !key.is_empty()
            && !key.starts_with("//")
            && !key.starts_with(';')
            && !key.starts_with('@')
            && !RESERVED_KEYS.contains(&key)
            && !self.denied.contains(key)
    }
}

impl<F> KeyFilter for F
where
    F: Fn(&str) -> bool,
{
    fn is_recognized(&self, key: &str) -> bool {
        self(key)
    }
}
