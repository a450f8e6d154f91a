//! Hosted record-store configuration.

use serde::{Deserialize, Serialize};

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Base URL of the record-store REST API (e.g., `https://api.example.com/v1`).
    #[serde(default)]
    pub url: String,

    /// Project API key sent with every request when no user token is available.
    #[serde(default)]
    pub api_key: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl StoreConfig {
    /// Check if the store has a URL to talk to.
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty()
    }

    /// The base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = StoreConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn base_url_strips_trailing_slashes() {
        let config = StoreConfig {
            url: "https://store.example.com/v1//".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
        assert_eq!(config.base_url(), "https://store.example.com/v1");
    }
}
