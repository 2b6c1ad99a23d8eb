//! Weighted link resolution.

use std::fmt;
use std::sync::Arc;
use tracing::trace;

use super::diagnostics::{DiagnosticSink, MissReport, TracingDiagnosticSink};
use super::matcher::match_link;
use crate::config::ResolverConfig;
use crate::model::{Link, LinkSource};
use crate::selector::{normalize, RelationInput, Selector};

/// Filters links against normalized selectors.
///
/// Each usable link is weighted by the index of the first selector it
/// matches; unmatched links are dropped. The survivors are stably sorted by
/// weight, so matches of earlier selectors come first and links matched by
/// the same selector keep their source order.
#[must_use]
pub fn filter_links(links: &[Link], selectors: &[Selector]) -> Vec<Link> {
    let mut weighted: Vec<(usize, &Link)> = links
        .iter()
        .filter(|link| link.is_usable())
        .filter_map(|link| {
            selectors
                .iter()
                .position(|selector| match_link(link, selector))
                .map(|weight| (weight, link))
        })
        .collect();

    weighted.sort_by_key(|(weight, _)| *weight);
    weighted.into_iter().map(|(_, link)| link.clone()).collect()
}

/// Resolves the links of `source` matching `relation` and `media_type`.
///
/// Returns an empty list when nothing matches; absence is never an error.
pub fn resolve<S, R>(source: &S, relation: R, media_type: Option<&str>) -> Vec<Link>
where
    S: LinkSource + ?Sized,
    R: Into<RelationInput>,
{
    let relation = relation.into();
    let selectors = normalize(&relation, media_type);
    filter_links(&source.links(), &selectors)
}

/// Resolves links and reports misses to a diagnostic sink.
///
/// Cheap to clone; the sink is shared.
#[derive(Clone)]
pub struct LinkResolver {
    config: ResolverConfig,
    sink: Arc<dyn DiagnosticSink>,
}

impl Default for LinkResolver {
    fn default() -> Self {
        Self::with_config(ResolverConfig::default())
    }
}

impl fmt::Debug for LinkResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkResolver")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl LinkResolver {
    /// Creates a resolver with default configuration and a tracing sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resolver whose tracing sink follows `config`.
    #[must_use]
    pub fn with_config(config: ResolverConfig) -> Self {
        let sink = Arc::new(TracingDiagnosticSink::new(config.miss_level.into()));
        Self { config, sink }
    }

    /// Replaces the diagnostic sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// The resolver configuration.
    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolves all matching links, best first.
    pub fn resolve<S, R>(&self, source: &S, relation: R, media_type: Option<&str>) -> Vec<Link>
    where
        S: LinkSource + ?Sized,
        R: Into<RelationInput>,
    {
        let relation = relation.into();
        let links = source.links();
        let selectors = normalize(&relation, media_type);
        let resolved = filter_links(&links, &selectors);
        trace!(
            relation = %relation,
            media_type = media_type.unwrap_or("*"),
            link_count = links.len(),
            matched = resolved.len(),
            "resolved link relation"
        );
        resolved
    }

    /// Resolves the single best link, if any.
    pub fn first<S, R>(&self, source: &S, relation: R, media_type: Option<&str>) -> Option<Link>
    where
        S: LinkSource + ?Sized,
        R: Into<RelationInput>,
    {
        self.resolve(source, relation, media_type).into_iter().next()
    }

    /// Reports a miss to the sink, honoring the inventory setting.
    pub(crate) fn report_miss(
        &self,
        relation: &RelationInput,
        media_type: Option<&str>,
        links: &[Link],
    ) {
        let report = MissReport::new(relation, media_type, links);
        let report = if self.config.include_inventory {
            report
        } else {
            report.without_inventory()
        };
        self.sink.link_missing(&report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LinkedRepresentation;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_filter_skips_unusable_links() {
        let links = vec![
            Link::new("self", ""),
            Link::new("", "/nowhere"),
            Link::new("self", "/1"),
        ];
        assert_eq!(
            filter_links(&links, &[Selector::new("self")]),
            vec![Link::new("self", "/1")]
        );
    }

    #[test]
    fn test_filter_weights_by_selector_order() {
        let links = vec![
            Link::new("fallback", "/f1"),
            Link::new("primary", "/p1"),
            Link::new("fallback", "/f2"),
            Link::new("primary", "/p2"),
        ];
        let selectors = [Selector::new("primary"), Selector::new("fallback")];
        let hrefs: Vec<String> = filter_links(&links, &selectors)
            .into_iter()
            .map(|link| link.href)
            .collect();
        assert_eq!(hrefs, vec!["/p1", "/p2", "/f1", "/f2"]);
    }

    #[test]
    fn test_filter_uses_first_matching_selector() {
        let links = vec![Link::new("a", "/a")];
        let selectors = [Selector::new("*"), Selector::new("a")];
        assert_eq!(filter_links(&links, &selectors).len(), 1);
    }

    #[test]
    fn test_resolver_first() {
        let rep = LinkedRepresentation::from_links(vec![
            Link::new("item", "/i/1"),
            Link::new("item", "/i/2"),
        ]);
        let resolver = LinkResolver::new();
        assert_eq!(resolver.first(&rep, "item", None).map(|l| l.href), Some("/i/1".to_string()));
        assert!(resolver.first(&rep, "up", None).is_none());
    }

    #[test]
    fn test_resolver_debug_hides_sink() {
        let rendered = format!("{:?}", LinkResolver::new());
        assert!(rendered.starts_with("LinkResolver"));
        assert!(rendered.contains("config"));
    }
}
