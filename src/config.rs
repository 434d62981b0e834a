//! Application configuration loaded from environment variables.

use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// Bind address for the HTTP server.
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Port for the Prometheus metrics exporter.
    #[serde(default = "default_metrics_port")]
    pub metrics_port: u16,

    // === Catalog ===
    /// Optional path to a JSON catalog seed file (array of products).
    /// When unset, the built-in catalog is used.
    #[serde(default)]
    pub catalog_path: Option<String>,

    // === Logging ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_metrics_port() -> u16 {
    9090
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> crate::Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.host.parse::<IpAddr>().is_err() {
            return Err(format!("HOST is not a valid IP address: {}", self.host));
        }

        if self.port == self.metrics_port {
            return Err("PORT and METRICS_PORT must differ".to_string());
        }

        if let Some(path) = &self.catalog_path {
            if path.is_empty() {
                return Err("CATALOG_PATH must not be empty when set".to_string());
            }
        }

        Ok(())
    }

    /// Socket address for the HTTP server.
    ///
    /// Call [`validate`](Self::validate) first; falls back to 0.0.0.0 if
    /// the host does not parse.
    pub fn bind_addr(&self) -> SocketAddr {
        let ip = self
            .host
            .parse::<IpAddr>()
            .unwrap_or_else(|_| IpAddr::from([0, 0, 0, 0]));
        SocketAddr::new(ip, self.port)
    }

    /// Socket address for the metrics exporter.
    pub fn metrics_addr(&self) -> SocketAddr {
        let ip = self
            .host
            .parse::<IpAddr>()
            .unwrap_or_else(|_| IpAddr::from([0, 0, 0, 0]));
        SocketAddr::new(ip, self.metrics_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            metrics_port: default_metrics_port(),
            catalog_path: None,
            rust_log: default_log_level(),
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_sensible() {
        assert_eq!(default_host(), "0.0.0.0");
        assert_eq!(default_port(), 8080);
        assert_eq!(default_metrics_port(), 9090);
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn validate_accepts_defaults() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_host() {
        let config = Config {
            host: "not-an-ip".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_port_collision() {
        let config = Config {
            port: 9090,
            metrics_port: 9090,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_catalog_path() {
        let config = Config {
            catalog_path: Some(String::new()),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn bind_addr_uses_host_and_port() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 3000,
            ..Config::default()
        };
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:3000");
    }
}
