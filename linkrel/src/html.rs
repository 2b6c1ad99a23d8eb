//! Link discovery from HTML documents.
//!
//! [`HtmlLinks::head`] collects the `<link>` elements of a page head;
//! [`HtmlLinks::within`] collects `<link>` and `<a>` elements inside the
//! containers matching a CSS selector. Both read `rel`, `href`, `type` and
//! `title` attributes as written, without resolving relative URLs.

use scraper::{ElementRef, Html, Selector as CssSelector};
use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

use crate::errors::{LinkrelError, Result};
use crate::model::{Link, LinkSource};

static HEAD_LINKS: LazyLock<CssSelector> =
    LazyLock::new(|| CssSelector::parse("head link").expect("valid selector"));
static LINK_ELEMENTS: LazyLock<CssSelector> =
    LazyLock::new(|| CssSelector::parse("link, a").expect("valid selector"));

/// Links discovered in an HTML document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlLinks {
    links: Vec<Link>,
}

impl HtmlLinks {
    /// Collects the `<link>` elements of the document head.
    #[must_use]
    pub fn head(html: &str) -> Self {
        let document = Html::parse_document(html);
        let links = document.select(&HEAD_LINKS).map(link_from_element).collect();
        let found = Self { links };
        debug!(link_count = found.links.len(), "collected head links");
        found
    }

    /// Collects `<link>`/`<a>` elements inside containers matching `container`.
    ///
    /// Containers are visited in document order. An element inside nested
    /// matching containers is collected once. A container selector that
    /// matches nothing yields no links.
    pub fn within(html: &str, container: &str) -> Result<Self> {
        let document = Html::parse_document(html);
        let container_selector = parse_css(container)?;

        let mut seen = HashSet::new();
        let links = document
            .select(&container_selector)
            .flat_map(|element| element.select(&LINK_ELEMENTS))
            .filter(|element| seen.insert(element.id()))
            .map(link_from_element)
            .collect::<Vec<_>>();
        debug!(container, link_count = links.len(), "collected element links");
        Ok(Self { links })
    }

    /// The discovered links, in document order.
    #[must_use]
    pub fn as_slice(&self) -> &[Link] {
        &self.links
    }

    /// Consumes the collection.
    #[must_use]
    pub fn into_links(self) -> Vec<Link> {
        self.links
    }
}

impl LinkSource for HtmlLinks {
    fn links(&self) -> Cow<'_, [Link]> {
        Cow::Borrowed(&self.links)
    }
}

fn parse_css(selector: &str) -> Result<CssSelector> {
    CssSelector::parse(selector).map_err(|e| LinkrelError::InvalidCssSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

fn link_from_element(element: ElementRef<'_>) -> Link {
    let attr = |name: &str| element.value().attr(name).map(str::to_string);
    Link {
        rel: attr("rel").unwrap_or_default(),
        href: attr("href").unwrap_or_default(),
        media_type: attr("type"),
        title: attr("title"),
    }
}
