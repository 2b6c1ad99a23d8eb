//! Configuration types for link resolution.

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::errors::Result;

/// Severity at which missed lookups are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    #[default]
    Debug,
    /// Info level.
    Info,
    /// Warn level.
    Warn,
    /// Error level.
    Error,
}

impl From<MissLevel> for Level {
    fn from(level: MissLevel) -> Self {
        match level {
            MissLevel::Trace => Self::TRACE,
            MissLevel::Debug => Self::DEBUG,
            MissLevel::Info => Self::INFO,
            MissLevel::Warn => Self::WARN,
            MissLevel::Error => Self::ERROR,
        }
    }
}

/// Configuration for a [`LinkResolver`](crate::matching::LinkResolver).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Level used when an accessor misses.
    #[serde(default)]
    pub miss_level: MissLevel,
    /// Whether miss reports list every link of the source.
    #[serde(default = "default_include_inventory")]
    pub include_inventory: bool,
}

fn default_include_inventory() -> bool {
    true
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            miss_level: MissLevel::default(),
            include_inventory: default_include_inventory(),
        }
    }
}

impl ResolverConfig {
    /// Creates a new resolver configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the miss report level.
    #[must_use]
    pub fn with_miss_level(mut self, level: MissLevel) -> Self {
        self.miss_level = level;
        self
    }

    /// Sets whether miss reports include the link inventory.
    #[must_use]
    pub fn with_inventory(mut self, include: bool) -> Self {
        self.include_inventory = include;
        self
    }

    /// Parses a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
