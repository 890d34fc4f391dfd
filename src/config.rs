//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote catalog service
    pub catalog_base_url: String,
    /// HTTP server port
    pub server_port: u16,
    /// Timeout in seconds for catalog requests
    pub upstream_timeout_secs: u64,
    /// Whether caching starts enabled
    pub cache_enabled: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CATALOG_BASE_URL` - Remote catalog base URL (default: http://localhost:9000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `UPSTREAM_TIMEOUT_SECS` - Catalog request timeout in seconds (default: 10)
    /// - `CACHE_ENABLED` - Initial caching flag (default: true)
    pub fn from_env() -> Self {
        Self {
            catalog_base_url: env::var("CATALOG_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:9000".to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            cache_enabled: env::var("CACHE_ENABLED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_base_url: "http://localhost:9000".to_string(),
            server_port: 3000,
            upstream_timeout_secs: 10,
            cache_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.catalog_base_url, "http://localhost:9000");
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.upstream_timeout_secs, 10);
        assert!(config.cache_enabled);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("CATALOG_BASE_URL");
        env::remove_var("SERVER_PORT");
        env::remove_var("UPSTREAM_TIMEOUT_SECS");
        env::remove_var("CACHE_ENABLED");

        let config = Config::from_env();
        assert_eq!(config.catalog_base_url, "http://localhost:9000");
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.upstream_timeout_secs, 10);
        assert!(config.cache_enabled);
    }
}
