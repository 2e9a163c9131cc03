//! Configuration loading.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("transport mnemonic is not configured (set mnemonic or mnemonic_env)")]
    MissingMnemonic,
    #[error("environment variable {0} is empty or not set")]
    MnemonicEnv(String),
}

/// Daemon configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Bridge transport configuration.
    pub transport: TransportConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Bridge transport configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TransportConfig {
    /// Address of the messenger bridge process (e.g. "127.0.0.1:7722").
    pub bridge_addr: String,
    /// Session mnemonic, inline.
    pub mnemonic: Option<String>,
    /// Name of an environment variable to read the mnemonic from instead.
    pub mnemonic_env: Option<String>,
    /// Seconds to wait before reconnecting after a dropped bridge connection.
    #[serde(default = "default_reconnect_secs")]
    pub reconnect_secs: u64,
}

impl TransportConfig {
    /// Resolve the transport credential.
    ///
    /// An inline `mnemonic` wins over `mnemonic_env`. Missing or empty is a
    /// fatal startup condition for the caller.
    pub fn mnemonic(&self) -> Result<String, ConfigError> {
        if let Some(m) = &self.mnemonic
            && !m.is_empty()
        {
            return Ok(m.clone());
        }
        if let Some(var) = &self.mnemonic_env {
            return match std::env::var(var) {
                Ok(m) if !m.is_empty() => Ok(m),
                _ => Err(ConfigError::MnemonicEnv(var.clone())),
            };
        }
        Err(ConfigError::MissingMnemonic)
    }
}

fn default_reconnect_secs() -> u64 {
    5
}
