//! Logging setup.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the application. [`init_tracing`] is a convenience for binaries that
//! want the usual `fmt` output; [`build_subscriber`] returns the same
//! subscriber uninstalled.

use serde::{Deserialize, Serialize};
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

use crate::errors::{LinkrelError, Result};

/// Subscriber settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter directives such as `linkrel=debug`. Falls back to `RUST_LOG`,
    /// then `info`.
    #[serde(default)]
    pub filter: Option<String>,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    /// Creates a config using `filter`.
    #[must_use]
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            filter: Some(filter.into()),
            json: false,
        }
    }

    /// Switches to JSON output.
    #[must_use]
    pub fn json(mut self) -> Self {
        self.json = true;
        self
    }

    fn env_filter(&self) -> Result<EnvFilter> {
        match self.filter {
            Some(ref directives) => EnvFilter::try_new(directives)
                .map_err(|e| LinkrelError::Configuration(format!("invalid log filter: {e}"))),
            None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))),
        }
    }
}

/// A boxed subscriber, ready for global or scoped installation.
pub type BoxedSubscriber = Box<dyn Subscriber + Send + Sync + 'static>;

/// Builds the `fmt` subscriber described by `config` without installing it.
///
/// Use [`tracing::subscriber::with_default`] to scope it to a closure.
pub fn build_subscriber(config: &LoggingConfig) -> Result<BoxedSubscriber> {
    let builder = tracing_subscriber::fmt().with_env_filter(config.env_filter()?);
    Ok(if config.json {
        Box::new(builder.json().finish())
    } else {
        Box::new(builder.finish())
    })
}

/// Installs a global `fmt` subscriber.
///
/// Fails if the filter is invalid or a global subscriber is already set.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    tracing::subscriber::set_global_default(build_subscriber(config)?)
        .map_err(|e| LinkrelError::Configuration(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter() {
        let err = build_subscriber(&LoggingConfig::with_filter("linkrel=loud"))
            .err()
            .expect("invalid filter must be rejected");
        assert!(matches!(err, LinkrelError::Configuration(ref m) if m.starts_with("invalid log filter")));
        assert!(init_tracing(&LoggingConfig::with_filter("linkrel=loud")).is_err());
    }

    #[test]
    fn test_scoped_subscriber_applies_filter() {
        let subscriber = build_subscriber(&LoggingConfig::with_filter("linkrel=debug").json()).unwrap();
        tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::enabled!(tracing::Level::DEBUG));
            assert!(!tracing::enabled!(tracing::Level::TRACE));
        });
    }

    #[test]
    fn test_deserialize() {
        let config: LoggingConfig = serde_json::from_str(r#"{ "json": true }"#).unwrap();
        assert!(config.json);
        assert!(config.filter.is_none());
    }
}
