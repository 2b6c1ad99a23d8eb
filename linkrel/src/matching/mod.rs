//! Link matching and resolution.
//!
//! [`match_field`] and [`match_link`] decide whether one link satisfies one
//! selector. [`resolve`] applies them across a whole [`LinkSource`] and
//! orders the result by selector precedence. The accessors ([`matches`],
//! [`get_uri`], [`get_title`]) answer the common questions on top of that.
//!
//! [`LinkSource`]: crate::model::LinkSource

mod accessors;
mod diagnostics;
mod matcher;
mod resolver;

pub use accessors::{get_title, get_uri, matches};
#[cfg(test)]
pub use diagnostics::MockDiagnosticSink;
pub use diagnostics::{
    render_link, CollectingDiagnosticSink, DiagnosticSink, MissReport, NoOpDiagnosticSink,
    TracingDiagnosticSink,
};
pub use matcher::{match_field, match_link};
pub use resolver::{filter_links, resolve, LinkResolver};
