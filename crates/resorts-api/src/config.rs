use std::collections::HashMap;
use std::env;
use std::net::SocketAddr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: String,
    pub db_path: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let values: HashMap<String, String> = env::vars().collect();
        Self::from_lookup(|name| values.get(name).cloned())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = value_or_default(&lookup, "RESORTS_API_BIND_ADDR", "0.0.0.0:5000");
        if bind_addr.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "RESORTS_API_BIND_ADDR must be a host:port socket address, got '{bind_addr}'"
            )));
        }

        let db_path = value_or_default(&lookup, "RESORTS_DB_PATH", "resorts.db");

        Ok(Self { bind_addr, db_path })
    }
}

fn value_or_default(lookup: impl Fn(&str) -> Option<String>, name: &str, default: &str) -> String {
    optional_trimmed(lookup, name).unwrap_or_else(|| default.to_string())
}

fn optional_trimmed(lookup: impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name).and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn config_uses_defaults() {
        let map: HashMap<&str, &str> = HashMap::new();
        let config =
            AppConfig::from_lookup(|key| map.get(key).map(|value| (*value).to_string())).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:5000");
        assert_eq!(config.db_path, "resorts.db");
    }

    #[test]
    fn config_reads_overrides() {
        let mut map = HashMap::new();
        map.insert("RESORTS_API_BIND_ADDR", " 127.0.0.1:8088 ");
        map.insert("RESORTS_DB_PATH", ":memory:");
        let config =
            AppConfig::from_lookup(|key| map.get(key).map(|value| (*value).to_string())).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:8088");
        assert_eq!(config.db_path, ":memory:");
    }

    #[test]
    fn config_rejects_bad_bind_addr() {
        let mut map = HashMap::new();
        map.insert("RESORTS_API_BIND_ADDR", "localhost");
        let err = AppConfig::from_lookup(|key| map.get(key).map(|value| (*value).to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("RESORTS_API_BIND_ADDR"));
    }
}
