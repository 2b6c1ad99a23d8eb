//! Field and link matching policy.

use crate::model::Link;
use crate::selector::{Pattern, Selector, MEDIA_TYPE_WILDCARD};

/// Decides whether a single link field satisfies a pattern.
///
/// Rules, first true wins:
/// 1. a regex pattern matches anywhere in a non-empty value;
/// 2. the pattern is `*` or `*/*`;
/// 3. the value is `*/*` (a link declaring itself fully wildcard);
/// 4. the value equals the exact pattern.
#[must_use]
pub fn match_field(value: &str, pattern: &Pattern) -> bool {
    if let Pattern::Regex(re) = pattern {
        if !value.is_empty() && re.is_match(value) {
            return true;
        }
    }
    if pattern.is_wildcard() || value == MEDIA_TYPE_WILDCARD {
        return true;
    }
    matches!(pattern, Pattern::Exact(exact) if exact == value)
}

/// Decides whether a link satisfies every constraint of a selector.
///
/// The relation always has to match. An absent title or media-type matcher
/// places no constraint; so does an empty media type.
#[must_use]
pub fn match_link(link: &Link, selector: &Selector) -> bool {
    if !match_field(&link.rel, &selector.rel) {
        return false;
    }

    let title_ok = selector
        .title
        .as_ref()
        .map_or(true, |title| match_field(link.title_or_empty(), title));

    let media_type_ok = selector
        .media_type
        .as_ref()
        .filter(|m| !m.is_empty_exact())
        .map_or(true, |media_type| match_field(link.media_type_or_empty(), media_type));

    title_ok && media_type_ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn re(source: &str) -> Pattern {
        Pattern::Regex(Regex::new(source).unwrap())
    }

    #[test]
    fn test_regex_is_unanchored_search() {
        assert!(match_field("edit-form", &re("form")));
        assert!(match_field("edit-form", &re("^edit")));
        assert!(!match_field("edit-form", &re("^form")));
    }

    #[test]
    fn test_regex_never_matches_empty_value() {
        assert!(!match_field("", &re(".*")));
        assert!(!match_field("", &re("^$")));
    }

    #[test]
    fn test_wildcard_patterns() {
        assert!(match_field("anything", &Pattern::exact("*")));
        assert!(match_field("", &Pattern::exact("*/*")));
    }

    #[test]
    fn test_wildcard_candidate_matches_anything() {
        assert!(match_field("*/*", &Pattern::exact("application/json")));
        assert!(match_field("*/*", &re("^text/")));
        assert!(!match_field("*", &Pattern::exact("application/json")));
    }

    #[test]
    fn test_exact_equality() {
        assert!(match_field("self", &Pattern::exact("self")));
        assert!(!match_field("self", &Pattern::exact("Self")));
        assert!(!match_field("selfish", &Pattern::exact("self")));
        assert!(match_field("", &Pattern::exact("")));
    }

    #[test]
    fn test_match_link_relation_required() {
        let link = Link::new("self", "/1");
        assert!(match_link(&link, &Selector::new("self")));
        assert!(!match_link(&link, &Selector::new("up")));
    }

    #[test]
    fn test_match_link_media_type() {
        let link = Link::new("tags", "/t/1").with_media_type("application/json");
        assert!(match_link(&link, &Selector::new("tags").with_media_type("application/json")));
        assert!(!match_link(&link, &Selector::new("tags").with_media_type("text/uri-list")));
        assert!(match_link(&link, &Selector::new("tags").with_media_type("*/*")));
        assert!(match_link(&link, &Selector::new("tags").with_media_type("")));
    }

    #[test]
    fn test_match_link_missing_type_against_constraint() {
        let link = Link::new("tags", "/t/1");
        assert!(!match_link(&link, &Selector::new("tags").with_media_type("application/json")));
    }

    #[test]
    fn test_match_link_title() {
        let link = Link::new("tags", "/t/2").with_title("t2");
        assert!(match_link(&link, &Selector::new("tags").with_title("t2")));
        assert!(!match_link(&link, &Selector::new("tags").with_title("t1")));
        assert!(match_link(&link, &Selector::new("tags").with_title(re("^t"))));
        assert!(!match_link(&Link::new("tags", "/t"), &Selector::new("tags").with_title("t2")));
    }
}
