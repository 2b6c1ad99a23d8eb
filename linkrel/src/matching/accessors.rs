//! Query helpers built on the resolver.
//!
//! The free functions use a default [`LinkResolver`], which reports misses
//! through `tracing` at debug level.

use super::resolver::LinkResolver;
use crate::model::LinkSource;
use crate::selector::RelationInput;

impl LinkResolver {
    /// Whether any link matches.
    pub fn matches<S, R>(&self, source: &S, relation: R, media_type: Option<&str>) -> bool
    where
        S: LinkSource + ?Sized,
        R: Into<RelationInput>,
    {
        !self.resolve(source, relation, media_type).is_empty()
    }

    /// The href of the best matching link, or `default` when none matches.
    ///
    /// A miss is reported to the diagnostic sink along with the links the
    /// source does offer.
    pub fn get_uri<S, R>(
        &self,
        source: &S,
        relation: R,
        media_type: Option<&str>,
        default: Option<&str>,
    ) -> Option<String>
    where
        S: LinkSource + ?Sized,
        R: Into<RelationInput>,
    {
        let relation = relation.into();
        match self.first(source, &relation, media_type) {
            Some(link) => Some(link.href),
            None => {
                self.report_miss(&relation, media_type, &source.links());
                default.map(str::to_string)
            }
        }
    }

    /// The title of the best matching link, or an empty string.
    pub fn get_title<S, R>(&self, source: &S, relation: R, media_type: Option<&str>) -> String
    where
        S: LinkSource + ?Sized,
        R: Into<RelationInput>,
    {
        self.first(source, relation, media_type)
            .and_then(|link| link.title)
            .unwrap_or_default()
    }
}

/// Whether any link of `source` matches.
pub fn matches<S, R>(source: &S, relation: R, media_type: Option<&str>) -> bool
where
    S: LinkSource + ?Sized,
    R: Into<RelationInput>,
{
    LinkResolver::default().matches(source, relation, media_type)
}

/// The href of the best matching link, or `default`.
pub fn get_uri<S, R>(
    source: &S,
    relation: R,
    media_type: Option<&str>,
    default: Option<&str>,
) -> Option<String>
where
    S: LinkSource + ?Sized,
    R: Into<RelationInput>,
{
    LinkResolver::default().get_uri(source, relation, media_type, default)
}

/// The title of the best matching link, or an empty string.
pub fn get_title<S, R>(source: &S, relation: R, media_type: Option<&str>) -> String
where
    S: LinkSource + ?Sized,
    R: Into<RelationInput>,
{
    LinkResolver::default().get_title(source, relation, media_type)
}
