use std::env;
use std::net::{IpAddr, SocketAddr};

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid BACKEND_HOST '{0}'")]
    InvalidHost(String),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub host: String,
    pub port: u16,
    pub cors_allowed_origin: Option<String>,
    pub max_body_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://regex.db".to_string(),
            database_max_connections: 5,
            host: "0.0.0.0".to_string(),
            port: 5000,
            cors_allowed_origin: None,
            max_body_bytes: 64 * 1024,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.database_max_connections),
            host: env::var("BACKEND_HOST").unwrap_or(defaults.host),
            port: env::var("BACKEND_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            max_body_bytes: env::var("MAX_BODY_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_body_bytes),
        };
        config.socket_addr()?;
        Ok(config)
    }

    /// Address the HTTP listener binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ConfigError::InvalidHost(self.host.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_sqlite_file() {
        let config = AppConfig::default();
        assert_eq!(config.database_url, "sqlite://regex.db");
        assert_eq!(config.port, 5000);
        assert!(config.cors_allowed_origin.is_none());
    }

    #[test]
    fn socket_addr_combines_host_and_port() {
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..AppConfig::default()
        };
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn socket_addr_rejects_hostnames() {
        let config = AppConfig {
            host: "not an ip".to_string(),
            ..AppConfig::default()
        };
        let err = config.socket_addr().unwrap_err();
        assert_eq!(err.to_string(), "Invalid BACKEND_HOST 'not an ip'");
    }
}
