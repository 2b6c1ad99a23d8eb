//! Field patterns: exact strings, wildcards and regular expressions.

use regex::Regex;
use std::fmt;

/// Full media-type wildcard.
pub const MEDIA_TYPE_WILDCARD: &str = "*/*";

/// Bare wildcard.
pub const WILDCARD: &str = "*";

/// A matcher for a single link field (relation, media type or title).
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Exact string equality. `*` and `*/*` act as wildcards.
    Exact(String),
    /// Unanchored regular-expression search.
    Regex(Regex),
}

impl Pattern {
    /// Creates an exact pattern.
    #[must_use]
    pub fn exact(value: impl Into<String>) -> Self {
        Self::Exact(value.into())
    }

    /// Compiles a regular-expression pattern.
    pub fn regex(source: &str) -> Result<Self, regex::Error> {
        Regex::new(source).map(Self::Regex)
    }

    /// The wildcard pattern.
    #[must_use]
    pub fn any() -> Self {
        Self::Exact(WILDCARD.to_string())
    }

    /// Whether this is the `*` or `*/*` wildcard.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Exact(s) if is_wildcard_str(s))
    }

    /// Whether this is an exact empty string.
    #[must_use]
    pub fn is_empty_exact(&self) -> bool {
        matches!(self, Self::Exact(s) if s.is_empty())
    }

    /// Whether this pattern is a regular expression.
    #[must_use]
    pub fn is_regex(&self) -> bool {
        matches!(self, Self::Regex(_))
    }

    /// The pattern source text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Exact(s) => s,
            Self::Regex(re) => re.as_str(),
        }
    }
}

/// Whether a string is one of the wildcard spellings.
#[must_use]
pub fn is_wildcard_str(value: &str) -> bool {
    value == WILDCARD || value == MEDIA_TYPE_WILDCARD
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Exact(a), Self::Exact(b)) => a == b,
            (Self::Regex(a), Self::Regex(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl Eq for Pattern {}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(s) => write!(f, "{s}"),
            Self::Regex(re) => write!(f, "/{}/", re.as_str()),
        }
    }
}

impl From<&str> for Pattern {
    fn from(value: &str) -> Self {
        Self::Exact(value.to_string())
    }
}

impl From<String> for Pattern {
    fn from(value: String) -> Self {
        Self::Exact(value)
    }
}

impl From<&String> for Pattern {
    fn from(value: &String) -> Self {
        Self::Exact(value.clone())
    }
}

impl From<Regex> for Pattern {
    fn from(value: Regex) -> Self {
        Self::Regex(value)
    }
}
