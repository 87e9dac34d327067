//! Process configuration from the environment.

use std::net::SocketAddr;

use thiserror::Error;

pub const ADDR_VAR: &str = "WAREHOUSE_ADDR";
pub const DEFAULT_ADDR: &str = "0.0.0.0:8000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub addr: SocketAddr,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable source (tests pass a closure).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw = lookup(ADDR_VAR).unwrap_or_else(|| {
            tracing::warn!("{ADDR_VAR} not set; using default {DEFAULT_ADDR}");
            DEFAULT_ADDR.to_string()
        });

        let addr = raw.parse().map_err(|_| ConfigError::InvalidAddr {
            var: ADDR_VAR,
            value: raw.clone(),
        })?;

        Ok(Self { addr })
    }
}
