//! Configuration management for the crudgen server.
//!
//! This module defines the `Config` struct holding the settings of the HTTP
//! front end. The configuration can be loaded from a YAML file, created
//! programmatically, or built from command-line arguments.
//!
//! # Examples
//!
//! ```no_run
//! use crudgen_core::config::Config;
//!
//! // Create a new config programmatically
//! let config = Config::new("127.0.0.1:8080".parse().unwrap());
//! assert_eq!(config.bind_address.port(), 8080);
//!
//! // Or load from a config file
//! # async fn load() -> crudgen_core::Result<()> {
//! let config = Config::from_file("crudgen.yaml").await?;
//! # Ok(())
//! # }
//! ```

// Internal imports (std, crate)
use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Port the server listens on when nothing else is configured
pub const DEFAULT_PORT: u16 = 5000;

/// Configuration for the crudgen HTTP server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Address the HTTP listener binds to
    #[serde(default = "default_bind_address")]
    pub bind_address: SocketAddr,
}

impl Config {
    /// Create a new Config
    pub fn new(bind_address: SocketAddr) -> Self {
        Self { bind_address }
    }

    /// Load configuration from a file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await.map_err(|e| {
            crate::Error::config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        let config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub async fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content).await?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(default_bind_address())
    }
}

fn default_bind_address() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_config_roundtrip() -> crate::Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("config.yaml");

        let config = Config::new(SocketAddr::from(([127, 0, 0, 1], 8080)));
        config.save(&file_path).await?;

        let loaded = Config::from_file(&file_path).await?;
        assert_eq!(loaded, config);
        assert_eq!(loaded.bind_address.to_string(), "127.0.0.1:8080");

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_keys_use_defaults() -> crate::Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("config.yaml");
        tokio::fs::write(&file_path, "{}\n").await?;

        let loaded = Config::from_file(&file_path).await?;
        assert_eq!(loaded, Config::default());
        assert_eq!(loaded.bind_address.to_string(), "0.0.0.0:5000");

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_file_is_config_error() {
        let err = Config::from_file("/nonexistent/crudgen.yaml")
            .await
            .unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }
}
