//! Environment-sourced configuration.
//!
//! `DATABASE_URL` is read with no default and no load-time validation: an
//! absent variable yields an empty connection string that fails at connect
//! time, not here. Listener addresses have fixed defaults and only fail if
//! an override does not parse.

use std::env;
use std::net::SocketAddr;

use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_METRICS_ADDR: &str = "0.0.0.0:9090";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid address '{value}' in {var}: {source}")]
    InvalidAddr {
        var: &'static str,
        value: String,
        source: std::net::AddrParseError,
    },
}

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string (required, unvalidated until connect).
    pub database_url: String,
    /// API listener address (default 0.0.0.0:8080).
    pub bind_addr: SocketAddr,
    /// Prometheus exporter address (default 0.0.0.0:9090).
    pub metrics_addr: SocketAddr,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: env::var("DATABASE_URL").unwrap_or_default(),
            bind_addr: parse_addr("BIND_ADDR", env::var("BIND_ADDR").ok(), DEFAULT_BIND_ADDR)?,
            metrics_addr: parse_addr(
                "METRICS_ADDR",
                env::var("METRICS_ADDR").ok(),
                DEFAULT_METRICS_ADDR,
            )?,
        })
    }
}

fn parse_addr(
    var: &'static str,
    raw: Option<String>,
    fallback: &str,
) -> Result<SocketAddr, ConfigError> {
    match raw {
        Some(value) => value.parse().map_err(|source| ConfigError::InvalidAddr {
            var,
            value,
            source,
        }),
        None => Ok(fallback.parse().expect("default address is well-formed")),
    }
}
