//! Server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Environment variable naming the catalogue document to serve.
pub const CATALOGUE_VAR: &str = "TRANSIT_CATALOGUE";

/// Environment variable holding the listen address.
pub const BIND_ADDR_VAR: &str = "TRANSIT_BIND_ADDR";

/// Address used when `TRANSIT_BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000);

/// Errors from reading the server configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset
    #[error("{0} is not set")]
    Missing(&'static str),

    /// A variable is set but cannot be parsed
    #[error("invalid {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Configuration for `serve` mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Request document holding `base_requests` and `routing_settings`.
    pub catalogue_path: PathBuf,

    /// Address to listen on.
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(catalogue_path: impl Into<PathBuf>, bind_addr: SocketAddr) -> Self {
        Self {
            catalogue_path: catalogue_path.into(),
            bind_addr,
        }
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let catalogue_path = lookup(CATALOGUE_VAR)
            .filter(|path| !path.is_empty())
            .ok_or(ConfigError::Missing(CATALOGUE_VAR))?;

        let bind_addr = match lookup(BIND_ADDR_VAR) {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: BIND_ADDR_VAR,
                value,
            })?,
            None => DEFAULT_BIND_ADDR,
        };

        Ok(Self::new(catalogue_path, bind_addr))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_bind_addr() {
        let config = ServerConfig::from_lookup(lookup(&[(CATALOGUE_VAR, "net.json")])).unwrap();
        assert_eq!(config, ServerConfig::new("net.json", DEFAULT_BIND_ADDR));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn explicit_bind_addr() {
        let config = ServerConfig::from_lookup(lookup(&[
            (CATALOGUE_VAR, "net.json"),
            (BIND_ADDR_VAR, "0.0.0.0:8080"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
    }

    #[test]
    fn catalogue_is_required() {
        let err = ServerConfig::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing(CATALOGUE_VAR));

        let err = ServerConfig::from_lookup(lookup(&[(CATALOGUE_VAR, "")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing(CATALOGUE_VAR));
    }

    #[test]
    fn invalid_bind_addr() {
        let err = ServerConfig::from_lookup(lookup(&[
            (CATALOGUE_VAR, "net.json"),
            (BIND_ADDR_VAR, "localhost"),
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                name: BIND_ADDR_VAR,
                value: "localhost".into(),
            }
        );
    }

    #[test]
    fn error_display() {
        assert_eq!(
            ConfigError::Missing(CATALOGUE_VAR).to_string(),
            "TRANSIT_CATALOGUE is not set"
        );
        assert_eq!(
            ConfigError::Invalid {
                name: BIND_ADDR_VAR,
                value: "x".into(),
            }
            .to_string(),
            "invalid TRANSIT_BIND_ADDR: x"
        );
    }
}
