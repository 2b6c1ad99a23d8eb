//! Diagnostics emitted when a lookup finds nothing.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, error, info, trace, warn, Level};

use crate::model::Link;
use crate::selector::{is_wildcard_str, RelationInput};

/// Description of a lookup that matched no link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissReport {
    /// The requested relation, rendered for display.
    pub relation: String,
    /// The requested media type, if any.
    pub media_type: Option<String>,
    /// One rendering per link available in the source.
    pub inventory: Vec<String>,
}

impl MissReport {
    /// Builds a report for a relation lookup over `links`.
    #[must_use]
    pub fn new(relation: &RelationInput, media_type: Option<&str>, links: &[Link]) -> Self {
        Self {
            relation: relation.to_string(),
            media_type: media_type.map(str::to_string),
            inventory: links.iter().map(render_link).collect(),
        }
    }

    /// Drops the link inventory.
    #[must_use]
    pub fn without_inventory(mut self) -> Self {
        self.inventory.clear();
        self
    }
}

/// Renders a link for the miss inventory.
///
/// `self` and `canonical` links show their target; other links show their
/// relation and, unless it is a wildcard, their media type.
#[must_use]
pub fn render_link(link: &Link) -> String {
    match link.rel.as_str() {
        "self" | "canonical" => format!("{}: {}", link.rel, link.href),
        rel => match link.media_type.as_deref() {
            Some(media_type) if !media_type.is_empty() && !is_wildcard_str(media_type) => {
                format!("{rel} [{media_type}]")
            }
            _ => rel.to_string(),
        },
    }
}

impl fmt::Display for MissReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No link found for relation {}", self.relation)?;
        if let Some(ref media_type) = self.media_type {
            write!(f, " with media type {media_type}")?;
        }
        if self.inventory.is_empty() {
            write!(f, "; no links available")
        } else {
            write!(f, "; available links: {}", self.inventory.join(", "))
        }
    }
}

/// Receiver for miss diagnostics.
///
/// Sinks must never fail; reporting is a side channel of a query.
#[cfg_attr(test, mockall::automock)]
pub trait DiagnosticSink: Send + Sync {
    /// Called when an accessor finds no link.
    fn link_missing(&self, report: &MissReport);
}

/// A sink that discards all reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpDiagnosticSink;

impl DiagnosticSink for NoOpDiagnosticSink {
    fn link_missing(&self, _report: &MissReport) {}
}

/// A sink that logs reports through `tracing`.
#[derive(Debug, Clone)]
pub struct TracingDiagnosticSink {
    level: Level,
}

impl Default for TracingDiagnosticSink {
    fn default() -> Self {
        Self { level: Level::DEBUG }
    }
}

impl TracingDiagnosticSink {
    /// Creates a sink logging at the given level.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    /// The configured level.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }
}

impl DiagnosticSink for TracingDiagnosticSink {
    fn link_missing(&self, report: &MissReport) {
        let relation = report.relation.as_str();
        let media_type = report.media_type.as_deref().unwrap_or("*");
        let link_count = report.inventory.len();
        match self.level {
            Level::TRACE => trace!(relation, media_type, link_count, "{report}"),
            Level::DEBUG => debug!(relation, media_type, link_count, "{report}"),
            Level::INFO => info!(relation, media_type, link_count, "{report}"),
            Level::WARN => warn!(relation, media_type, link_count, "{report}"),
            _ => error!(relation, media_type, link_count, "{report}"),
        }
    }
}

/// A sink that keeps reports in memory, for tests.
#[derive(Debug, Default)]
pub struct CollectingDiagnosticSink {
    reports: parking_lot::RwLock<Vec<MissReport>>,
}

impl CollectingDiagnosticSink {
    /// Creates a new collecting sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected reports.
    #[must_use]
    pub fn reports(&self) -> Vec<MissReport> {
        self.reports.read().clone()
    }

    /// Returns the number of collected reports.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.read().len()
    }

    /// Returns true if nothing has been reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.read().is_empty()
    }

    /// Clears all collected reports.
    pub fn clear(&self) {
        self.reports.write().clear();
    }
}

impl DiagnosticSink for CollectingDiagnosticSink {
    fn link_missing(&self, report: &MissReport) {
        self.reports.write().push(report.clone());
    }
}
