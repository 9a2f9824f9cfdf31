use serde::{Deserialize, Serialize};

use super::chains::{L2Config, OriginConfig};
use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::gateway::GatewayConfig;
use super::logging::LoggingConfig;
use super::relayer::RelayerConfig;
use super::rpc::RpcConfig;
use super::server::ServerConfig;

pub const GATEWAY_KEY_ENV: &str = "NAMEGATE_GATEWAY_KEY";
pub const RELAYER_KEY_ENV: &str = "NAMEGATE_RELAYER_KEY";

/// Main configuration structure for namegate
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP server (bind address, port)
    #[serde(default)]
    pub server: ServerConfig,

    /// CCIP-Read gateway signing and fetch settings
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Chain 1, where the origin resolver lives
    #[serde(default)]
    pub origin: OriginConfig,

    /// Chain 2, where names are registered and transfers are relayed
    #[serde(default)]
    pub l2: L2Config,

    /// Meta-transaction relayer
    #[serde(default)]
    pub relayer: RelayerConfig,

    /// JSON-RPC transport and retry policy
    #[serde(default)]
    pub rpc: RpcConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub database: DatabaseConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. namegate.toml in current directory
    /// 3. /etc/namegate/config.toml
    /// 4. Default configuration
    ///
    /// Key environment variables and CLI overrides are applied on top.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(found) = Self::get_config_path() {
            Self::from_file(&found)?
        } else {
            Self::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Private keys from the environment take precedence over the file.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup(GATEWAY_KEY_ENV).filter(|k| !k.is_empty()) {
            self.gateway.signing_key = Some(key);
        }
        if let Some(key) = lookup(RELAYER_KEY_ENV).filter(|k| !k.is_empty()) {
            self.relayer.private_key = Some(key);
        }
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(db) = overrides.database_path {
            self.database.path = db;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("Web port cannot be 0".to_string()));
        }

        if self.gateway.signature_ttl_secs == 0 {
            return Err(ConfigError::Validation(
                "gateway.signature_ttl_secs must be at least 1".to_string(),
            ));
        }

        if self.rpc.retry.max_attempts == 0 {
            return Err(ConfigError::Validation(
                "rpc.retry.max_attempts must be at least 1".to_string(),
            ));
        }

        if self.rpc.retry.multiplier < 1.0 {
            return Err(ConfigError::Validation(
                "rpc.retry.multiplier cannot be below 1.0".to_string(),
            ));
        }

        if let (Some(gateway), Some(relayer)) = (
            self.gateway.signing_key.as_deref(),
            self.relayer.private_key.as_deref(),
        ) {
            if normalize_key(gateway) == normalize_key(relayer) {
                return Err(ConfigError::Validation(
                    "gateway signing key must differ from the relayer key".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Save configuration to file. Private keys are never written.
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new("namegate.toml").exists() {
            Some("namegate.toml".to_string())
        } else if std::path::Path::new("/etc/namegate/config.toml").exists() {
            Some("/etc/namegate/config.toml".to_string())
        } else {
            None
        }
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().trim_start_matches("0x").to_ascii_lowercase()
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub database_path: Option<String>,
    pub log_level: Option<String>,
}
