//! Reduction of relation inputs to canonical selectors.

use super::{Pattern, RelationInput, RelationItem, Selector};

/// Turns the optional media-type argument into a selector constraint.
///
/// Absent, empty, `*` and `*/*` all mean "any media type" and yield `None`.
#[must_use]
pub fn media_type_constraint(media_type: Option<&str>) -> Option<Pattern> {
    media_type
        .filter(|m| !m.is_empty() && !super::is_wildcard_str(m))
        .map(Pattern::exact)
}

/// Normalizes a relation input into an ordered list of selectors.
///
/// - A string or pattern becomes one selector carrying `media_type`.
/// - A structured selector is returned alone and unchanged; `media_type` is
///   ignored because the selector declares its own constraints.
/// - A list whose items are all structured selectors is returned as-is.
///   Otherwise each pattern item is paired with `media_type` and each
///   structured item passes through, preserving order.
#[must_use]
pub fn normalize(input: &RelationInput, media_type: Option<&str>) -> Vec<Selector> {
    let with_media_type = |rel: Pattern| Selector {
        rel,
        media_type: media_type_constraint(media_type),
        title: None,
    };

    match input {
        RelationInput::String(s) => vec![with_media_type(Pattern::exact(s.as_str()))],
        RelationInput::Pattern(p) => vec![with_media_type(p.clone())],
        RelationInput::Structured(selector) => vec![selector.clone()],
        RelationInput::List(items) if items.iter().all(RelationItem::is_structured) => items
            .iter()
            .filter_map(|item| match item {
                RelationItem::Structured(selector) => Some(selector.clone()),
                RelationItem::Pattern(_) => None,
            })
            .collect(),
        RelationInput::List(items) => items
            .iter()
            .map(|item| match item {
                RelationItem::Pattern(p) => with_media_type(p.clone()),
                RelationItem::Structured(selector) => selector.clone(),
            })
            .collect(),
    }
}
