//! Selector normalization.
//!
//! Callers name the relation they want in several shapes (see
//! [`RelationInput`]). [`normalize`] reduces all of them to an ordered list of
//! canonical [`Selector`]s; the position of a selector in that list is its
//! precedence during resolution.

mod criteria;
mod input;
mod normalize;
mod pattern;

pub use criteria::Selector;
pub use input::{RelationInput, RelationItem};
pub use normalize::{media_type_constraint, normalize};
pub use pattern::{is_wildcard_str, Pattern, MEDIA_TYPE_WILDCARD, WILDCARD};
