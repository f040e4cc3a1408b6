// ABOUTME: Configuration management for the soulbound dashboard
// Handles gateway endpoint settings, output preferences and environment overrides

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Prefix for environment variables that override config values
pub const ENV_PREFIX: &str = "SBT_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    #[serde(default = "default_version")]
    pub version: String,

    /// Contract gateway settings
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Output preferences
    #[serde(default)]
    pub output: OutputPreferences,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Gateway root; endpoints are `{base_url}/{invoke|query}/{contract}/{method}`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Network identifier sent in every request envelope
    #[serde(default = "default_network")]
    pub network: String,

    /// Blockchain identifier sent in every request envelope
    #[serde(default = "default_blockchain")]
    pub blockchain: String,

    /// Wallet the gateway signs with
    #[serde(default = "default_wallet_address")]
    pub wallet_address: String,

    /// Contract id of the SBT deployment (mint, query, lookup, list)
    #[serde(default = "default_sbt_contract_id")]
    pub sbt_contract_id: String,

    /// Contract id used for transfer attempts
    #[serde(default = "default_transfer_contract_id")]
    pub transfer_contract_id: String,

    /// Request timeout in seconds; 0 waits indefinitely
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            network: default_network(),
            blockchain: default_blockchain(),
            wallet_address: default_wallet_address(),
            sbt_contract_id: default_sbt_contract_id(),
            transfer_contract_id: default_transfer_contract_id(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl GatewayConfig {
    /// Client timeout, `None` when `timeout_secs` is 0
    pub const fn timeout(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_secs))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputPreferences {
    /// Default output format when `--format` is not given ("text" or "json")
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputPreferences {
    fn default() -> Self {
        Self { format: default_format() }
    }
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_base_url() -> String {
    "https://gateway-api.kalp.studio/v1/contract/kalp".to_string()
}

fn default_network() -> String {
    "TESTNET".to_string()
}

fn default_blockchain() -> String {
    "KALP".to_string()
}

fn default_wallet_address() -> String {
    "ded665bca7d412891f44a571d908b66184b0ee10".to_string()
}

fn default_sbt_contract_id() -> String {
    "Fendsz9A6Jlo5iuulGq16n3IQshulw7L1732704125253".to_string()
}

fn default_transfer_contract_id() -> String {
    "KaiWcmxQ9GxzHIdlmWAbQQpcnX59TSqV1732700814244".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_user_agent() -> String {
    format!("soulbound/{}", env!("CARGO_PKG_VERSION"))
}

fn default_format() -> String {
    "text".to_string()
}

impl AppConfig {
    /// Load configuration from default locations, then apply `SBT_*` overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from_paths(&Self::get_config_paths())?;
        config.apply_env_overrides(&load_from_env());
        Ok(config)
    }

    /// Load a single explicit config file on top of the defaults
    pub fn load_file(path: &Path) -> Result<Self> {
        let mut config = Self::from_table(Self::read_table(path)?)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.apply_env_overrides(&load_from_env());
        Ok(config)
    }

    /// Merge every existing file, later paths overriding earlier ones.
    ///
    /// Files are merged as TOML tables before deserializing, so a key set
    /// in a later file wins even when it restates the default.
    pub fn load_from_paths(paths: &[PathBuf]) -> Result<Self> {
        let mut merged = toml::Table::new();

        for path in paths {
            if path.exists() {
                debug!("Loading config from {}", path.display());
                merge_tables(&mut merged, Self::read_table(path)?);
            }
        }

        Self::from_table(merged).context("Failed to parse merged config")
    }

    fn read_table(path: &Path) -> Result<toml::Table> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        content
            .parse::<toml::Table>()
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    fn from_table(table: toml::Table) -> Result<Self> {
        Ok(toml::Value::Table(table).try_into()?)
    }

    /// Save configuration to the user config directory
    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::user_config_path()?;
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Configuration file paths, lowest precedence first
    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("/etc/soulbound/config.toml")];

        if let Ok(user_path) = Self::user_config_path() {
            paths.push(user_path);
        }

        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(".soulbound").join("config.toml"));
        }

        paths
    }

    /// `~/.soulbound/config/config.toml`
    pub fn user_config_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home_dir.join(".soulbound").join("config").join("config.toml"))
    }

    /// Apply `SBT_*` environment overrides
    pub fn apply_env_overrides(&mut self, vars: &HashMap<String, String>) {
        let get = |name: &str| {
            vars.get(&format!("{ENV_PREFIX}{name}"))
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(url) = get("GATEWAY_URL") {
            self.gateway.base_url = url;
        }
        if let Some(network) = get("NETWORK") {
            self.gateway.network = network;
        }
        if let Some(blockchain) = get("BLOCKCHAIN") {
            self.gateway.blockchain = blockchain;
        }
        if let Some(wallet) = get("WALLET_ADDRESS") {
            self.gateway.wallet_address = wallet;
        }
        if let Some(id) = get("CONTRACT_ID") {
            self.gateway.sbt_contract_id = id;
        }
        if let Some(id) = get("TRANSFER_CONTRACT_ID") {
            self.gateway.transfer_contract_id = id;
        }
        if let Some(secs) = get("TIMEOUT_SECS") {
            match secs.parse() {
                Ok(secs) => self.gateway.timeout_secs = secs,
                Err(_) => tracing::warn!("Ignoring invalid {ENV_PREFIX}TIMEOUT_SECS: {secs}"),
            }
        }
        if let Some(format) = get("FORMAT") {
            self.output.format = format;
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            gateway: GatewayConfig::default(),
            output: OutputPreferences::default(),
        }
    }
}

/// Overlay `layer` onto `base`; nested tables merge key by key
fn merge_tables(base: &mut toml::Table, layer: toml::Table) {
    for (key, value) in layer {
        match value {
            toml::Value::Table(theirs) => match base.get_mut(&key) {
                Some(toml::Value::Table(ours)) => merge_tables(ours, theirs),
                _ => {
                    base.insert(key, toml::Value::Table(theirs));
                }
            },
            value => {
                base.insert(key, value);
            }
        }
    }
}

/// Collect `SBT_*` variables from the process environment
pub fn load_from_env() -> HashMap<String, String> {
    std::env::vars().filter(|(k, _)| k.starts_with(ENV_PREFIX)).collect()
}
