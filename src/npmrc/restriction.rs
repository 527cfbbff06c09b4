//! Dependency type restriction inferred from npm configuration
//!
//! From npm 7 the restriction is carried by `omit`, which npm always
//! derives from the deprecated `only`/`production` keys as well, so `omit`
//! wins wherever it appears. Up to npm 6 `npm config list` prints entries by
//! descending priority, so among the legacy keys the first one seen wins.

use std::fmt;

/// Which dependency types an npm operation includes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeRestriction {
    /// Nothing in the configuration says otherwise
    #[default]
    Unset,
    All,
    ProdOnly,
    DevOnly,
}

impl TypeRestriction {
    /// Apply one observed (key, value) pair
    #[must_use]
    pub fn observe(self, key: &str, value: &str) -> Self {
        if key == "omit" {
            return if value.contains("dev") {
                Self::ProdOnly
            } else {
                Self::All
            };
        }

        if self != Self::Unset {
            return self;
        }

        match key {
            "only" if value.contains("prod") => Self::ProdOnly,
            "only" if value.contains("dev") => Self::DevOnly,
            "production" if value.contains("true") => Self::ProdOnly,
            _ => self,
        }
    }

    /// Fold a sequence of pairs, in observation order, into the final restriction
    pub fn resolve<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        pairs
            .into_iter()
            .fold(Self::Unset, |state, (key, value)| state.observe(key, value))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unset => "unset",
            Self::All => "all",
            Self::ProdOnly => "prod-only",
            Self::DevOnly => "dev-only",
        }
    }
}

impl fmt::Display for TypeRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
