#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! hkid Configuration
//!
//! This crate provides configuration management for the hkid service.
//! It handles loading, saving, and overriding configuration that specifies:
//! - The ledger node connection and the account transactions are sent from
//! - The registry, controller and resolver contract addresses
//! - The HTTP listener
//! - Logging
//!
//! Configuration is stored in TOML format. Every section has defaults that
//! point at the public debug chain deployment, and selected values can be
//! overridden from `HKID_*` environment variables.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use transport::TransportConfig;
use types::Address;

/// Errors that can occur when loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    /// Failed to parse the TOML configuration file
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// Failed to serialize configuration to TOML format
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Could not locate the user's configuration directory
    #[error("Could not find user config directory")]
    ConfigDirUnavailable,
    /// An environment override held a value that could not be parsed
    #[error("Invalid value for {key}: {value}")]
    InvalidEnv {
        /// Environment variable name
        key: String,
        /// Offending value
        value: String,
    },
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Ledger node connection
    pub ledger: LedgerConfig,
    /// Contract addresses
    pub contracts: ContractsConfig,
    /// HTTP listener
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Ledger connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Node-managed account that state-changing calls are sent from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<Address>,
    /// Node endpoint and credentials
    pub transport: TransportConfig,
}

/// Addresses of the deployed contracts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractsConfig {
    /// Name registry (ERC-721 style token per name)
    pub registry: Address,
    /// Registration and pricing controller
    pub controller: Address,
    /// Record resolver; resolver operations are unavailable when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolver: Option<Address>,
}

/// HTTP listener configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or filter directive (debug, info, warn, error)
    pub level: String,
    /// Log file path (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self { Self { host: "0.0.0.0".to_string(), port: 3000 } }
}

impl Default for LoggingConfig {
    fn default() -> Self { Self { level: "info".to_string(), file: None } }
}

impl Default for ContractsConfig {
    fn default() -> Self {
        Self {
            registry: Address::new([
                0x62, 0x48, 0xcf, 0x19, 0x32, 0x1a, 0x35, 0x4a, 0x97, 0x0b, 0x99, 0xe8, 0x11, 0xc9,
                0x79, 0xa1, 0x8b, 0x4e, 0x64, 0x46,
            ]),
            controller: Address::new([
                0xc1, 0x3c, 0xa3, 0x4e, 0xd9, 0x9c, 0xa8, 0x45, 0x00, 0x17, 0x98, 0xae, 0xed, 0xd8,
                0x68, 0xa3, 0x0d, 0x83, 0x9d, 0x7a,
            ]),
            resolver: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file at `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save this configuration as a pretty-printed TOML file at `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Returns the default config file path:
    /// `{config_dir()}/hkid/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::ConfigDirUnavailable)?.join("hkid");
        Ok(config_dir.join("config.toml"))
    }

    /// Resolve the configuration the service starts with.
    ///
    /// An explicit `path` must exist. Without one, the default path is used
    /// if a file is there, and built-in defaults otherwise. Environment
    /// overrides are applied last.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Ok(default) if default.exists() => Self::from_file(default)?,
                _ => Self::default(),
            },
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Apply `HKID_*` overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides using `lookup` to read variables.
    ///
    /// Recognized keys: `HKID_RPC_URL`, `HKID_SENDER`, `HKID_REGISTRY`,
    /// `HKID_CONTROLLER`, `HKID_RESOLVER`, `HKID_HOST`, `HKID_PORT`,
    /// `HKID_LOG_LEVEL`.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        fn parse<T: std::str::FromStr>(key: &str, value: String) -> Result<T, ConfigError> {
            value.parse().map_err(|_| ConfigError::InvalidEnv { key: key.to_string(), value })
        }

        if let Some(url) = lookup("HKID_RPC_URL") {
            self.ledger.transport.endpoint = url;
        }
        if let Some(v) = lookup("HKID_SENDER") {
            self.ledger.sender = Some(parse("HKID_SENDER", v)?);
        }
        if let Some(v) = lookup("HKID_REGISTRY") {
            self.contracts.registry = parse("HKID_REGISTRY", v)?;
        }
        if let Some(v) = lookup("HKID_CONTROLLER") {
            self.contracts.controller = parse("HKID_CONTROLLER", v)?;
        }
        if let Some(v) = lookup("HKID_RESOLVER") {
            self.contracts.resolver = Some(parse("HKID_RESOLVER", v)?);
        }
        if let Some(host) = lookup("HKID_HOST") {
            self.server.host = host;
        }
        if let Some(v) = lookup("HKID_PORT") {
            self.server.port = parse("HKID_PORT", v)?;
        }
        if let Some(level) = lookup("HKID_LOG_LEVEL") {
            self.logging.level = level;
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ledger: LedgerConfig { sender: None, transport: TransportConfig::default() },
            contracts: ContractsConfig::default(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
