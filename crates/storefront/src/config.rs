//! Process configuration from the environment.

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

pub const ADDR_VAR: &str = "STOREFRONT_ADDR";
pub const DEFAULT_ADDR: &str = "0.0.0.0:8001";
pub const API_URL_VAR: &str = "INVENTORY_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const TIMEOUT_VAR: &str = "INVENTORY_API_TIMEOUT_MS";
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },
    #[error("{var} must be a positive number of milliseconds, got {value}")]
    InvalidTimeout { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub addr: SocketAddr,
    /// Base URL of the inventory service; validated when the client is built.
    pub inventory_api_url: String,
    pub timeout: Duration,
}

impl StorefrontConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var_or = |var: &str, default: &str| {
            lookup(var).unwrap_or_else(|| {
                tracing::warn!("{var} not set; using default {default}");
                default.to_string()
            })
        };

        let raw_addr = var_or(ADDR_VAR, DEFAULT_ADDR);
        let addr = raw_addr.parse().map_err(|_| ConfigError::InvalidAddr {
            var: ADDR_VAR,
            value: raw_addr.clone(),
        })?;

        let inventory_api_url = var_or(API_URL_VAR, DEFAULT_API_URL);

        let raw_timeout = var_or(TIMEOUT_VAR, &DEFAULT_TIMEOUT_MS.to_string());
        let timeout_ms = raw_timeout
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|ms| *ms > 0)
            .ok_or_else(|| ConfigError::InvalidTimeout {
                var: TIMEOUT_VAR,
                value: raw_timeout.clone(),
            })?;

        Ok(Self {
            addr,
            inventory_api_url,
            timeout: Duration::from_millis(timeout_ms),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from(vars: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        StorefrontConfig::from_lookup(|var| map.get(var).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = from(&[]).unwrap();
        assert_eq!(cfg.addr.port(), 8001);
        assert_eq!(cfg.inventory_api_url, DEFAULT_API_URL);
        assert_eq!(cfg.timeout, Duration::from_millis(DEFAULT_TIMEOUT_MS));
    }

    #[test]
    fn reads_overrides() {
        let cfg = from(&[
            (ADDR_VAR, "127.0.0.1:3000"),
            (API_URL_VAR, "http://warehouse:9000"),
            (TIMEOUT_VAR, "250"),
        ])
        .unwrap();
        assert_eq!(cfg.addr.port(), 3000);
        assert_eq!(cfg.inventory_api_url, "http://warehouse:9000");
        assert_eq!(cfg.timeout, Duration::from_millis(250));
    }

    #[test]
    fn rejects_bad_timeout() {
        for bad in ["0", "-5", "soon"] {
            assert!(matches!(
                from(&[(TIMEOUT_VAR, bad)]),
                Err(ConfigError::InvalidTimeout { .. })
            ));
        }
    }

    #[test]
    fn rejects_bad_addr() {
        assert!(matches!(
            from(&[(ADDR_VAR, "localhost")]),
            Err(ConfigError::InvalidAddr { .. })
        ));
    }
}
