//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `VERDURA_HOST` - Bind address (default: 127.0.0.1)
//! - `VERDURA_PORT` - Listen port (default: 8080)
//! - `VERDURA_DATA_DIR` - Directory holding the JSON snapshot files
//!   (default: `data`)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// API application configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory holding the product and cart snapshot files
    pub data_dir: PathBuf,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("VERDURA_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("VERDURA_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("VERDURA_PORT", "8080")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("VERDURA_PORT".to_string(), e.to_string()))?;
        let data_dir = PathBuf::from(get_env_or_default("VERDURA_DATA_DIR", "data"));

        Ok(Self {
            host,
            port,
            data_dir,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Path of the product snapshot file.
    #[must_use]
    pub fn products_path(&self) -> PathBuf {
        self.data_dir.join("products.json")
    }

    /// Path of the cart snapshot file.
    #[must_use]
    pub fn carts_path(&self) -> PathBuf {
        self.data_dir.join("carts.json")
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::Path;

    use super::*;

    fn config() -> ApiConfig {
        ApiConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 8080,
            data_dir: PathBuf::from("data"),
        }
    }

    #[test]
    fn test_socket_addr() {
        let addr = config().socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_snapshot_paths() {
        let config = config();
        assert_eq!(config.products_path(), Path::new("data/products.json"));
        assert_eq!(config.carts_path(), Path::new("data/carts.json"));
    }
}
