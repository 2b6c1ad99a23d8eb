//! Linked resource representations.

use serde::{Deserialize, Deserializer, Serialize};

use super::Link;

/// A resource payload carrying a `links` array.
///
/// Domain fields other than `links` are preserved in [`fields`](Self::fields)
/// and ignored by the resolver. Deserialization never fails because of the
/// `links` member: a missing or non-array value yields no links, and array
/// elements that are not link objects are dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LinkedRepresentation {
    /// The hypermedia links.
    #[serde(default, deserialize_with = "lenient_links")]
    pub links: Vec<Link>,
    /// All other members of the payload.
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl LinkedRepresentation {
    /// Creates an empty representation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a representation from links.
    #[must_use]
    pub fn from_links(links: Vec<Link>) -> Self {
        Self {
            links,
            fields: serde_json::Map::new(),
        }
    }

    /// Adds a link.
    #[must_use]
    pub fn with_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    /// Adds a domain field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    /// Gets a domain field.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&serde_json::Value> {
        self.fields.get(key)
    }

    /// Parses a representation from a JSON value, degrading malformed links.
    ///
    /// Non-object values produce an empty representation.
    #[must_use]
    pub fn from_value(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Object(map) => {
                let mut fields = map.clone();
                let links = fields
                    .remove("links")
                    .map(|links| links_from_value(&links))
                    .unwrap_or_default();
                Self { links, fields }
            }
            _ => Self::default(),
        }
    }
}

/// Collects the link objects of a JSON array, skipping anything else.
pub(crate) fn links_from_value(value: &serde_json::Value) -> Vec<Link> {
    value.as_array().map_or_else(Vec::new, |items| {
        items
            .iter()
            .filter(|item| item.is_object())
            .filter_map(|item| Link::deserialize(item).ok())
            .collect()
    })
}

fn lenient_links<'de, D>(deserializer: D) -> Result<Vec<Link>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(links_from_value(&value))
}
