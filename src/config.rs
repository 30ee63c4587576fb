//! Environment-driven runtime configuration.

use crate::error::ConfigError;
use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
}

impl AppConfig {
    /// Read config from the environment. `DATABASE_URL` is required; the rest
    /// have defaults (`BIND_ADDR` 0.0.0.0:3000, `MAX_CONNECTIONS` 5).
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".into())
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                name: "BIND_ADDR",
                reason: e.to_string(),
            })?;
        let max_connections = std::env::var("MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                name: "MAX_CONNECTIONS",
                reason: e.to_string(),
            })?;
        Ok(Self {
            database_url,
            bind_addr,
            max_connections,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env vars are process-wide, so one test owns them all.
    #[test]
    fn missing_database_url_then_defaults() {
        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("BIND_ADDR");
        std::env::remove_var("MAX_CONNECTIONS");
        assert!(matches!(
            AppConfig::from_env(),
            Err(ConfigError::Missing("DATABASE_URL"))
        ));

        std::env::set_var("DATABASE_URL", "postgres://localhost/marketplace");
        let cfg = AppConfig::from_env().unwrap();
        assert_eq!(cfg.bind_addr, "0.0.0.0:3000".parse().unwrap());
        assert_eq!(cfg.max_connections, 5);

        std::env::set_var("BIND_ADDR", "not-an-addr");
        assert!(matches!(
            AppConfig::from_env(),
            Err(ConfigError::Invalid { name: "BIND_ADDR", .. })
        ));
        std::env::remove_var("BIND_ADDR");
    }
}
