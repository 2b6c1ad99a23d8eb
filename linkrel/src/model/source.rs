//! The link source capability.

use std::borrow::Cow;

use super::representation::links_from_value;
use super::{Link, LinkedRepresentation};

/// Anything that can supply a flat list of links to the resolver.
///
/// Implementations must not fail: a source with nothing usable returns an
/// empty list. Embedders with a document model of their own (a browser DOM,
/// an XML tree) implement this trait to plug into resolution.
pub trait LinkSource {
    /// Returns the links in document order.
    fn links(&self) -> Cow<'_, [Link]>;
}

impl LinkSource for [Link] {
    fn links(&self) -> Cow<'_, [Link]> {
        Cow::Borrowed(self)
    }
}

impl<const N: usize> LinkSource for [Link; N] {
    fn links(&self) -> Cow<'_, [Link]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl LinkSource for Vec<Link> {
    fn links(&self) -> Cow<'_, [Link]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl LinkSource for LinkedRepresentation {
    fn links(&self) -> Cow<'_, [Link]> {
        Cow::Borrowed(self.links.as_slice())
    }
}

/// Raw JSON: an array of link objects, or an object exposing `links`.
impl LinkSource for serde_json::Value {
    fn links(&self) -> Cow<'_, [Link]> {
        let links = match self {
            Self::Array(_) => links_from_value(self),
            Self::Object(map) => map.get("links").map(links_from_value).unwrap_or_default(),
            _ => Vec::new(),
        };
        Cow::Owned(links)
    }
}

impl<S: LinkSource> LinkSource for Option<S> {
    fn links(&self) -> Cow<'_, [Link]> {
        match self {
            Some(source) => source.links(),
            None => Cow::Borrowed(&[]),
        }
    }
}

impl<S: LinkSource + ?Sized> LinkSource for &S {
    fn links(&self) -> Cow<'_, [Link]> {
        (**self).links()
    }
}
