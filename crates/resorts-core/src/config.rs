//! Client configuration.
//!
//! Resolves where the collection store lives. The CLI layers its `--api-url`
//! flag on top of the environment.

use std::collections::HashMap;
use std::env;

use crate::error::{Error, Result};
use crate::util::{normalize_base_url, normalize_text_option};

/// Environment variable holding the REST base path
pub const API_BASE_URL_VAR: &str = "RESORTS_API_BASE_URL";

/// Base path used when nothing is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base path of the REST API, without trailing slash (e.g. `http://host/api`)
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self> {
        let values: HashMap<String, String> = env::vars().collect();
        Self::from_lookup(|name| values.get(name).cloned())
    }

    /// Resolve config with an explicit override taking precedence over env.
    pub fn resolve(override_url: Option<String>) -> Result<Self> {
        match normalize_text_option(override_url) {
            Some(url) => Self::with_base_url(&url),
            None => Self::from_env(),
        }
    }

    pub fn with_base_url(url: &str) -> Result<Self> {
        let api_base_url = normalize_base_url(url).map_err(Error::InvalidInput)?;
        Ok(Self { api_base_url })
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        normalize_text_option(lookup(API_BASE_URL_VAR))
            .map_or_else(|| Ok(Self::default()), |url| Self::with_base_url(&url))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn config_defaults_to_local_api() {
        let map: HashMap<&str, &str> = HashMap::new();
        let config =
            ClientConfig::from_lookup(|key| map.get(key).map(|value| (*value).to_string()))
                .unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn config_reads_and_normalizes_env_value() {
        let mut map = HashMap::new();
        map.insert(API_BASE_URL_VAR, " https://resorts.example.com/api/ ");
        let config =
            ClientConfig::from_lookup(|key| map.get(key).map(|value| (*value).to_string()))
                .unwrap();
        assert_eq!(config.api_base_url, "https://resorts.example.com/api");
    }

    #[test]
    fn config_rejects_non_http_url() {
        let mut map = HashMap::new();
        map.insert(API_BASE_URL_VAR, "resorts.example.com");
        let err = ClientConfig::from_lookup(|key| map.get(key).map(|value| (*value).to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("http://"));
    }

    #[test]
    fn explicit_override_wins() {
        let config = ClientConfig::resolve(Some("http://10.0.0.5:5000/api".to_string())).unwrap();
        assert_eq!(config.api_base_url, "http://10.0.0.5:5000/api");
    }
}
