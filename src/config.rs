//! Server configuration.
//!
//! Configuration is read from an optional TOML file first, then overridden
//! by environment variables, so a deployment can ship a file while a local
//! run needs nothing at all.

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Optional JSON file of aggregate buckets to seed the in-memory store
    /// with at startup.
    pub aggregates_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: default_host(),
            port: default_port(),
            aggregates_path: None,
        }
    }
}

impl ServerConfig {
    /// Load the configuration.
    ///
    /// # Environment Variables
    /// - `FITRANK_CONFIG` (optional): path to a TOML configuration file
    /// - `HOST` (optional, default: 0.0.0.0): bind host
    /// - `PORT` (optional, default: 8080): bind port
    /// - `AGGREGATES_PATH` (optional): JSON seed file for the local store
    ///
    /// Environment variables take precedence over the file.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = match env::var("FITRANK_CONFIG") {
            Ok(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("cannot read config file {}", path))?;
                toml::from_str(&raw)
                    .with_context(|| format!("invalid config file {}", path))?
            }
            Err(_) => ServerConfig::default(),
        };

        if let Ok(host) = env::var("HOST") {
            config.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            config.port = port
                .parse()
                .with_context(|| format!("invalid PORT value: {}", port))?;
        }
        if let Ok(path) = env::var("AGGREGATES_PATH") {
            config.aggregates_path = Some(PathBuf::from(path));
        }

        Ok(config)
    }

    /// Bind address string, `host:port`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
