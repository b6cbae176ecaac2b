//! Client configuration
//!
//! Values come from defaults, then from `OBIBLE_*` environment variables; the
//! CLI layers its flags on top.

use crate::error::ConfigError;
use reqwest::Url;
use std::time::Duration;

/// Backend used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Maximum number of search hits requested per query
pub const DEFAULT_SEARCH_LIMIT: u32 = 50;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_BASE_URL: &str = "OBIBLE_API_BASE_URL";
pub const ENV_SEARCH_LIMIT: &str = "OBIBLE_SEARCH_LIMIT";
pub const ENV_TIMEOUT_SECS: &str = "OBIBLE_TIMEOUT_SECS";

/// Settings for the backend API client
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Origin of the backend; endpoint paths are resolved against it
    pub base_url: Url,

    /// `limit` parameter sent with every search
    pub search_limit: u32,

    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            search_limit: DEFAULT_SEARCH_LIMIT,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Build a configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            config.base_url = parse_base_url(&url)?;
        }

        if let Some(limit) = lookup(ENV_SEARCH_LIMIT) {
            config.search_limit = match limit.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: ENV_SEARCH_LIMIT,
                        value: limit,
                    })
                }
            };
        }

        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            config.timeout = match secs.trim().parse::<u64>() {
                Ok(n) if n > 0 => Duration::from_secs(n),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: ENV_TIMEOUT_SECS,
                        value: secs,
                    })
                }
            };
        }

        Ok(config)
    }

    /// Replace the base URL
    pub fn with_base_url(mut self, url: &str) -> Result<Self, ConfigError> {
        self.base_url = parse_base_url(url)?;
        Ok(self)
    }
}

/// Parse and validate a backend base URL (http or https only)
pub fn parse_base_url(value: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        value: value.to_string(),
        reason,
    };

    let url = Url::parse(value.trim()).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme '{}'", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url.as_str(), "http://localhost:5000/");
        assert_eq!(config.search_limit, 50);
    }

    #[test]
    fn test_environment_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            (ENV_BASE_URL, "https://bible.example.org"),
            (ENV_SEARCH_LIMIT, "10"),
            (ENV_TIMEOUT_SECS, "5"),
        ]))
        .unwrap();
        assert_eq!(config.base_url.host_str(), Some("bible.example.org"));
        assert_eq!(config.search_limit, 10);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_blank_base_url_keeps_default() {
        let config = ClientConfig::from_lookup(lookup(&[(ENV_BASE_URL, "  ")])).unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:5000/");
    }

    #[test]
    fn test_rejects_zero_search_limit() {
        let err = ClientConfig::from_lookup(lookup(&[(ENV_SEARCH_LIMIT, "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: ENV_SEARCH_LIMIT, .. }));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let err = ClientConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: ENV_TIMEOUT_SECS, .. }));
        assert!(ClientConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "soon")])).is_err());
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        assert!(parse_base_url("ftp://example.org").is_err());
        assert!(parse_base_url("not a url").is_err());
    }
}
