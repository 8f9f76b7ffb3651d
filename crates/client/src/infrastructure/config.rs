//! Catalog API configuration.

use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default origin of the creature catalog API.
pub const DEFAULT_API_BASE_URL: &str = "https://rpg-creature-api.freecodecamp.rocks/api";

/// Default timeout applied to every endpoint attempt.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

pub const BASE_URL_ENV: &str = "BESTIARY_API_BASE_URL";
pub const REQUEST_TIMEOUT_ENV: &str = "BESTIARY_REQUEST_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("Invalid request timeout '{0}': expected a positive number of seconds")]
    InvalidTimeout(String),
}

/// Where the catalog lives and how long one attempt may take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
    request_timeout: Duration,
}

impl ApiConfig {
    /// Build a config for `base_url` with the default timeout.
    ///
    /// The URL must be able to carry path segments; a trailing slash is fine.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let parsed = Url::parse(base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "URL cannot carry path segments".to_string(),
            });
        }

        Ok(Self {
            base_url: parsed,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        })
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Create config from environment variables.
    ///
    /// Uses `BESTIARY_API_BASE_URL` and `BESTIARY_REQUEST_TIMEOUT_SECS`,
    /// falling back to defaults if not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup(BASE_URL_ENV).unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let config = Self::new(&base_url)?;

        match lookup(REQUEST_TIMEOUT_ENV) {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or_else(|| ConfigError::InvalidTimeout(raw.clone()))?;
                Ok(config.with_request_timeout(Duration::from_secs(secs)))
            }
            None => Ok(config),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_API_BASE_URL).expect("default API base URL is valid"),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_env_is_empty() {
        let config = ApiConfig::from_lookup(lookup_from(&[])).expect("config");
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.base_url().as_str(), DEFAULT_API_BASE_URL);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn reads_overrides() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            (BASE_URL_ENV, "http://localhost:8080/v2/"),
            (REQUEST_TIMEOUT_ENV, " 3 "),
        ]))
        .expect("config");

        assert_eq!(config.base_url().as_str(), "http://localhost:8080/v2/");
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn rejects_bad_timeout() {
        let err = ApiConfig::from_lookup(lookup_from(&[(REQUEST_TIMEOUT_ENV, "0")]))
            .expect_err("zero timeout");
        assert_eq!(err, ConfigError::InvalidTimeout("0".to_string()));
    }

    #[test]
    fn rejects_non_base_url() {
        assert!(matches!(
            ApiConfig::new("mailto:someone@example.com"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            ApiConfig::new("not a url"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }
}
