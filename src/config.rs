//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::constants::{DEFAULT_HTTP_ADDR, NWS_API_BASE, REQUEST_TIMEOUT_SECS};

/// Which surfaces the process serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// HTTP surface only
    Http,
    /// MCP surface over stdin/stdout only
    Stdio,
    /// Both surfaces in one process
    Both,
}

impl FromStr for Transport {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "stdio" => Ok(Self::Stdio),
            "both" => Ok(Self::Both),
            _ => Err(ConfigError::InvalidTransport(s.to_string())),
        }
    }
}

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP surface bind address.
    pub addr: SocketAddr,
    /// Surfaces to serve.
    pub transport: Transport,
    /// Provider base URL.
    pub nws_api_base: String,
    /// Upper bound for one provider request.
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `WEATHER_HTTP_ADDR` | HTTP bind address | `0.0.0.0:8000` |
    /// | `WEATHER_TRANSPORT` | `http`, `stdio` or `both` | `http` |
    /// | `NWS_API_BASE` | Provider base URL | `https://api.weather.gov` |
    /// | `NWS_TIMEOUT_SECS` | Request timeout in seconds | `30` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr = lookup("WEATHER_HTTP_ADDR")
            .unwrap_or_else(|| DEFAULT_HTTP_ADDR.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let transport = match lookup("WEATHER_TRANSPORT") {
            Some(value) => value.parse()?,
            None => Transport::Http,
        };

        let nws_api_base = lookup("NWS_API_BASE").unwrap_or_else(|| NWS_API_BASE.to_string());

        let timeout_secs = match lookup("NWS_TIMEOUT_SECS") {
            Some(value) => value
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidTimeout(value))?,
            None => REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            addr,
            transport,
            nws_api_base,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid WEATHER_HTTP_ADDR format")]
    InvalidAddr,

    #[error("Invalid WEATHER_TRANSPORT '{0}', expected http, stdio or both")]
    InvalidTransport(String),

    #[error("Invalid NWS_TIMEOUT_SECS '{0}', expected a positive number of seconds")]
    InvalidTimeout(String),
}
