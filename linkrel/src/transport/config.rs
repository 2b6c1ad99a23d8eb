//! Configuration for the HTTP transport.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

use crate::errors::{LinkrelError, Result};

/// Configuration for outbound link requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransportConfig {
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: f64,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Base URL that relative hrefs are joined onto.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Headers added to every request.
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

fn default_timeout() -> f64 {
    30.0
}

fn default_user_agent() -> String {
    concat!("linkrel/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
            base_url: None,
            headers: HashMap::new(),
        }
    }
}

impl TransportConfig {
    /// Creates a new transport configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the timeout.
    #[must_use]
    pub fn with_timeout(mut self, seconds: f64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Adds a header.
    #[must_use]
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Gets timeout as Duration.
    ///
    /// Negative, non-finite or out-of-range values are a configuration error.
    pub fn timeout(&self) -> Result<Duration> {
        Duration::try_from_secs_f64(self.timeout_seconds).map_err(|e| {
            LinkrelError::Configuration(format!(
                "invalid timeout_seconds {}: {e}",
                self.timeout_seconds
            ))
        })
    }

    /// Checks that every field holds a usable value.
    pub fn validate(&self) -> Result<()> {
        self.timeout().map(|_| ())
    }

    /// Parses and validates a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TransportConfig::default();
        assert_eq!(config.timeout().unwrap(), Duration::from_secs(30));
        assert!(config.user_agent.starts_with("linkrel/"));
        assert!(config.base_url.is_none());
    }

    #[test]
    fn test_builder() {
        let config = TransportConfig::new()
            .with_timeout(2.5)
            .with_base_url("https://api.example.com/")
            .with_header("Authorization", "Bearer t");
        assert_eq!(config.timeout().unwrap(), Duration::from_millis(2500));
        assert_eq!(config.headers.get("Authorization").map(String::as_str), Some("Bearer t"));
    }

    #[test]
    fn test_from_json() {
        let config = TransportConfig::from_json_str(
            r#"{ "base_url": "https://api.example.com", "headers": { "X-Tenant": "a" } }"#,
        )
        .unwrap();
        assert_eq!(config.base_url.as_deref(), Some("https://api.example.com"));
        assert_eq!(config.timeout_seconds, 30.0);
    }

    #[test]
    fn test_oversized_timeout_is_rejected() {
        let err = TransportConfig::from_json_str(r#"{ "timeout_seconds": 1e20 }"#).unwrap_err();
        assert!(matches!(err, LinkrelError::Configuration(ref m) if m.starts_with("invalid timeout_seconds")));
    }

    #[test]
    fn test_unusable_timeouts() {
        for seconds in [f64::INFINITY, f64::NAN, -1.0] {
            let config = TransportConfig::new().with_timeout(seconds);
            assert!(matches!(config.timeout(), Err(LinkrelError::Configuration(_))));
            assert!(config.validate().is_err());
        }
        assert!(TransportConfig::new().with_timeout(0.0).validate().is_ok());
    }
}
