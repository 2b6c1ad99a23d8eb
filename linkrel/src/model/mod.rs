//! Link data model and link sources.
//!
//! A [`Link`] is an immutable hypermedia affordance. Links are gathered from
//! anything implementing [`LinkSource`]: plain slices, a
//! [`LinkedRepresentation`], raw JSON, or an embedder-provided type.

mod link;
mod representation;
mod source;

pub use link::Link;
pub use representation::LinkedRepresentation;
pub use source::LinkSource;
