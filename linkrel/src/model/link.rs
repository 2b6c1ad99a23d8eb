//! The link value type.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A typed hyperlink carried by a resource representation.
///
/// Serialized with the Atom/HAL field names `rel`, `href`, `type` and
/// `title`. Missing `rel` or `href` deserialize as empty strings; such links
/// are never eligible for matching (see [`Link::is_usable`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Link {
    /// The link relation.
    #[serde(default)]
    pub rel: String,
    /// The target URI.
    #[serde(default)]
    pub href: String,
    /// The media type of the target, if declared.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    /// A human-readable title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Link {
    /// Creates a new link with a relation and target.
    #[must_use]
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
            media_type: None,
            title: None,
        }
    }

    /// Sets the media type.
    #[must_use]
    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Whether the link has both a relation and a target.
    ///
    /// Links with an empty `rel` or `href` are skipped by the resolver.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        !self.rel.is_empty() && !self.href.is_empty()
    }

    /// The media type, or an empty string when undeclared.
    #[must_use]
    pub fn media_type_or_empty(&self) -> &str {
        self.media_type.as_deref().unwrap_or("")
    }

    /// The title, or an empty string when undeclared.
    #[must_use]
    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Converts to dictionary.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut dict = HashMap::new();
        dict.insert("rel".to_string(), serde_json::json!(self.rel));
        dict.insert("href".to_string(), serde_json::json!(self.href));
        if let Some(ref v) = self.media_type {
            dict.insert("type".to_string(), serde_json::json!(v));
        }
        if let Some(ref v) = self.title {
            dict.insert("title".to_string(), serde_json::json!(v));
        }
        dict
    }
}
