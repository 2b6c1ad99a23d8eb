//! Error types for link resolution.
//!
//! Absence of a matching link is not an error at the resolver level: the
//! resolver returns an empty list and the accessors fall back to defaults.
//! Only the transport client, which needs a link to act on, turns a miss
//! into [`LinkrelError::NoMatch`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Convenience result alias used throughout the crate.
pub type Result<T, E = LinkrelError> = std::result::Result<T, E>;

/// The main error type for linkrel operations.
#[derive(Debug, Error)]
pub enum LinkrelError {
    /// A relation input could not be normalized into selectors.
    #[error("{0}")]
    UnsupportedSelector(#[from] UnsupportedSelectorError),

    /// A regular expression in a relation input failed to compile.
    #[error("Invalid relation pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// No link satisfied a mandatory relation.
    #[error("{0}")]
    NoMatch(#[from] NoMatchError),

    /// The resolved href could not be turned into a request target.
    #[error("Invalid link target '{href}': {reason}")]
    InvalidTarget {
        /// The offending href.
        href: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A CSS selector used to locate a link container was invalid.
    #[error("Invalid CSS selector '{selector}': {reason}")]
    InvalidCssSelector {
        /// The selector text.
        selector: String,
        /// Parser message.
        reason: String,
    },

    /// The request was cancelled before or during dispatch.
    #[error("Request cancelled: {0}")]
    Cancelled(String),

    /// The transport failed to complete the request.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid or unusable configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl LinkrelError {
    /// Returns true for errors caused by call-site misuse rather than
    /// runtime conditions.
    #[must_use]
    pub fn is_programmer_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedSelector(_) | Self::InvalidPattern(_) | Self::InvalidCssSelector { .. }
        )
    }
}

/// Error raised when a relation input has a shape that cannot be normalized.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unsupported relation selector: {message} (got {value})")]
pub struct UnsupportedSelectorError {
    /// Description of the problem.
    pub message: String,
    /// The offending input, rendered as JSON.
    pub value: String,
}

impl UnsupportedSelectorError {
    /// Creates a new unsupported selector error.
    #[must_use]
    pub fn new(message: impl Into<String>, value: &serde_json::Value) -> Self {
        Self {
            message: message.into(),
            value: value.to_string(),
        }
    }
}

/// Error raised when a resource does not expose the link an action requires.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[error("Resource does not support the required interface: no link for relation {relation}{}", media_type_suffix(.media_type.as_deref()))]
pub struct NoMatchError {
    /// The requested relation, rendered for display.
    pub relation: String,
    /// The requested media type, if any.
    pub media_type: Option<String>,
}

fn media_type_suffix(media_type: Option<&str>) -> String {
    media_type.map_or_else(String::new, |m| format!(" with media type {m}"))
}

impl NoMatchError {
    /// Creates a new no-match error.
    #[must_use]
    pub fn new(relation: impl Into<String>, media_type: Option<&str>) -> Self {
        Self {
            relation: relation.into(),
            media_type: media_type.map(str::to_string),
        }
    }

    /// Converts to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();
        map.insert(
            "relation".to_string(),
            serde_json::Value::String(self.relation.clone()),
        );
        if let Some(ref media_type) = self.media_type {
            map.insert(
                "media_type".to_string(),
                serde_json::Value::String(media_type.clone()),
            );
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_selector_display() {
        let err = UnsupportedSelectorError::new("numbers are not relations", &serde_json::json!(42));
        assert_eq!(
            err.to_string(),
            "Unsupported relation selector: numbers are not relations (got 42)"
        );
    }

    #[test]
    fn test_no_match_display() {
        let err = NoMatchError::new("edit", Some("application/json"));
        assert!(err.to_string().contains("no link for relation edit"));
        assert!(err.to_string().ends_with("with media type application/json"));

        let bare = NoMatchError::new("self", None);
        assert!(bare.to_string().ends_with("relation self"));
    }

    #[test]
    fn test_no_match_to_dict() {
        let dict = NoMatchError::new("edit", None).to_dict();
        assert_eq!(dict.get("relation"), Some(&serde_json::json!("edit")));
        assert!(!dict.contains_key("media_type"));
    }

    #[test]
    fn test_programmer_error_classification() {
        let unsupported: LinkrelError =
            UnsupportedSelectorError::new("bad", &serde_json::Value::Null).into();
        assert!(unsupported.is_programmer_error());

        let missing: LinkrelError = NoMatchError::new("edit", None).into();
        assert!(!missing.is_programmer_error());
    }
}
