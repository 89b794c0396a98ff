//! Environment-driven configuration, read once at startup.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_CATALOG_PATH: &str = "data/items.json";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid BIND_ADDR {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Resolved API configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// `CATALOG_PATH`: JSON catalog file loaded at startup.
    pub catalog_path: PathBuf,
    /// `BIND_ADDR`: listen address.
    pub bind_addr: SocketAddr,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration from an arbitrary key lookup (unset or empty
    /// values fall back to defaults).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let catalog_path = get("CATALOG_PATH").unwrap_or_else(|| {
            tracing::warn!("CATALOG_PATH not set; using {DEFAULT_CATALOG_PATH}");
            DEFAULT_CATALOG_PATH.to_string()
        });

        let bind = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind.clone(),
                source,
            })?;

        Ok(Self {
            catalog_path: PathBuf::from(catalog_path),
            bind_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.catalog_path, PathBuf::from(DEFAULT_CATALOG_PATH));
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR.parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn env_values_override_defaults() {
        let cfg = ApiConfig::from_lookup(lookup(&[
            ("CATALOG_PATH", "/srv/items.json"),
            ("BIND_ADDR", "127.0.0.1:9000"),
        ]))
        .unwrap();
        assert_eq!(cfg.catalog_path, PathBuf::from("/srv/items.json"));
        assert_eq!(cfg.bind_addr.port(), 9000);
    }

    #[test]
    fn empty_values_fall_back() {
        let cfg = ApiConfig::from_lookup(lookup(&[("CATALOG_PATH", ""), ("BIND_ADDR", "  ")])).unwrap();
        assert_eq!(cfg.catalog_path, PathBuf::from(DEFAULT_CATALOG_PATH));
        assert_eq!(cfg.bind_addr.port(), 8080);
    }

    #[test]
    fn invalid_bind_addr_is_rejected() {
        let err = ApiConfig::from_lookup(lookup(&[("BIND_ADDR", "not-an-addr")])).unwrap_err();
        assert!(err.to_string().contains("not-an-addr"));
    }
}
