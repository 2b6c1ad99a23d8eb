//! Test assertions for resolved links.

use crate::matching::resolve;
use crate::model::{Link, LinkSource};
use crate::selector::RelationInput;

/// Asserts that the links have exactly the expected hrefs, in order.
pub fn assert_hrefs(links: &[Link], expected: &[&str]) {
    let actual: Vec<&str> = links.iter().map(|link| link.href.as_str()).collect();
    assert_eq!(
        actual, expected,
        "Expected hrefs {:?}, got {:?}",
        expected, actual
    );
}

/// Asserts that resolving `relation` yields exactly `expected` hrefs.
pub fn assert_resolves_to<S, R>(source: &S, relation: R, media_type: Option<&str>, expected: &[&str])
where
    S: LinkSource + ?Sized,
    R: Into<RelationInput>,
{
    assert_hrefs(&resolve(source, relation, media_type), expected);
}

/// Asserts that resolving `relation` yields nothing.
pub fn assert_no_match<S, R>(source: &S, relation: R, media_type: Option<&str>)
where
    S: LinkSource + ?Sized,
    R: Into<RelationInput>,
{
    let relation = relation.into();
    let resolved = resolve(source, &relation, media_type);
    assert!(
        resolved.is_empty(),
        "Expected no link for relation {}, got {:?}",
        relation,
        resolved
    );
}
