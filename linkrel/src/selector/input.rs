//! Caller-facing relation inputs.

use regex::Regex;
use std::fmt;

use super::{Pattern, Selector};
use crate::errors::{Result, UnsupportedSelectorError};

/// Every shape a caller may use to name the wanted relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationInput {
    /// A single exact relation (or wildcard).
    String(String),
    /// A single relation pattern.
    Pattern(Pattern),
    /// An ordered list of alternatives; earlier entries win.
    List(Vec<RelationItem>),
    /// A selector carrying its own media-type and title constraints.
    Structured(Selector),
}

/// One entry of a [`RelationInput::List`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationItem {
    /// A relation pattern, combined with the call's media type.
    Pattern(Pattern),
    /// A selector used as-is.
    Structured(Selector),
}

impl RelationItem {
    /// Whether this item is a structured selector.
    #[must_use]
    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Structured(_))
    }
}

impl RelationInput {
    /// Builds a relation input from dynamic JSON.
    ///
    /// Accepted shapes:
    /// - `"rel"`: exact relation
    /// - `{"regex": "^ed"}`: relation pattern
    /// - `{"rel": ..., "mediaType"|"type": ..., "title": ...}`: selector,
    ///   where each field is a string or a `{"regex": ...}` object
    /// - an array of the above (arrays do not nest)
    ///
    /// Anything else fails with [`UnsupportedSelectorError`].
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Array(items) => items
                .iter()
                .map(item_from_value)
                .collect::<Result<Vec<_>>>()
                .map(Self::List),
            other => Ok(match item_from_value(other)? {
                RelationItem::Pattern(Pattern::Exact(s)) => Self::String(s),
                RelationItem::Pattern(pattern) => Self::Pattern(pattern),
                RelationItem::Structured(selector) => Self::Structured(selector),
            }),
        }
    }
}

fn item_from_value(value: &serde_json::Value) -> Result<RelationItem> {
    match value {
        serde_json::Value::String(s) => Ok(RelationItem::Pattern(Pattern::exact(s.as_str()))),
        serde_json::Value::Object(map) if map.contains_key("rel") => {
            let rel = field_pattern(map.get("rel"), value)?
                .ok_or_else(|| UnsupportedSelectorError::new("selector relation is null", value))?;
            let media_type = match map.get("mediaType") {
                Some(media_type) => field_pattern(Some(media_type), value)?,
                None => field_pattern(map.get("type"), value)?,
            };
            let title = field_pattern(map.get("title"), value)?;
            Ok(RelationItem::Structured(Selector {
                rel,
                media_type,
                title,
            }))
        }
        serde_json::Value::Object(_) => Ok(RelationItem::Pattern(regex_from_value(value)?)),
        serde_json::Value::Array(_) => Err(UnsupportedSelectorError::new(
            "nested arrays are not relation selectors",
            value,
        )
        .into()),
        _ => Err(UnsupportedSelectorError::new(
            "expected a string, a regex object, or a selector object",
            value,
        )
        .into()),
    }
}

fn field_pattern(
    field: Option<&serde_json::Value>,
    selector: &serde_json::Value,
) -> Result<Option<Pattern>> {
    match field {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(Pattern::exact(s.as_str()))),
        Some(obj @ serde_json::Value::Object(_)) => regex_from_value(obj).map(Some),
        Some(_) => Err(UnsupportedSelectorError::new(
            "selector fields must be strings or regex objects",
            selector,
        )
        .into()),
    }
}

fn regex_from_value(value: &serde_json::Value) -> Result<Pattern> {
    let source = value
        .get("regex")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| {
            UnsupportedSelectorError::new("objects must carry 'rel' or a string 'regex'", value)
        })?;
    Ok(Pattern::regex(source)?)
}

impl fmt::Display for RelationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Pattern(p) => write!(f, "{p}"),
            Self::Structured(selector) => write!(f, "{selector}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    match item {
                        RelationItem::Pattern(p) => write!(f, "{p}")?,
                        RelationItem::Structured(s) => write!(f, "{s}")?,
                    }
                }
                write!(f, "]")
            }
        }
    }
}

impl From<&str> for RelationInput {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for RelationInput {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for RelationInput {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<Regex> for RelationInput {
    fn from(value: Regex) -> Self {
        Self::Pattern(Pattern::Regex(value))
    }
}

impl From<Pattern> for RelationInput {
    fn from(value: Pattern) -> Self {
        Self::Pattern(value)
    }
}

impl From<Selector> for RelationInput {
    fn from(value: Selector) -> Self {
        Self::Structured(value)
    }
}

impl<T: Into<RelationItem>> From<Vec<T>> for RelationInput {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<RelationItem>, const N: usize> From<[T; N]> for RelationInput {
    fn from(value: [T; N]) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl From<&RelationInput> for RelationInput {
    fn from(value: &RelationInput) -> Self {
        value.clone()
    }
}

impl From<&str> for RelationItem {
    fn from(value: &str) -> Self {
        Self::Pattern(Pattern::exact(value))
    }
}

impl From<String> for RelationItem {
    fn from(value: String) -> Self {
        Self::Pattern(Pattern::Exact(value))
    }
}

impl From<Regex> for RelationItem {
    fn from(value: Regex) -> Self {
        Self::Pattern(Pattern::Regex(value))
    }
}

impl From<Pattern> for RelationItem {
    fn from(value: Pattern) -> Self {
        Self::Pattern(value)
    }
}

impl From<Selector> for RelationItem {
    fn from(value: Selector) -> Self {
        Self::Structured(value)
    }
}
