use std::path::PathBuf;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StepkitError};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Download-wait defaults
    #[serde(default)]
    pub downloads: DownloadsConfig,

    /// Key-value store location
    #[serde(default)]
    pub store: StoreConfig,

    /// Table resolver defaults
    #[serde(default)]
    pub table: TableConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadsConfig {
    /// Directory watched for downloaded files (falls back to the platform
    /// download dir, then the working directory)
    pub dir: Option<String>,

    /// Wait timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Poll interval in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for DownloadsConfig {
    fn default() -> Self {
        Self {
            dir: None,
            timeout_ms: default_timeout_ms(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    20_000
}

fn default_poll_interval_ms() -> u64 {
    500
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store file path (overrides the platform data dir)
    pub path: Option<String>,

    /// Default store name
    #[serde(default = "default_store_name")]
    pub default_store: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: None,
            default_store: default_store_name(),
        }
    }
}

fn default_store_name() -> String {
    "misc".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// Base for row indices: 0 or 1
    #[serde(default = "default_row_index_base")]
    pub row_index_base: u8,

    /// Base for numeric column specifiers: 0 or 1
    #[serde(default)]
    pub column_index_base: u8,

    /// Case-insensitive matching by default
    #[serde(default = "default_case_insensitive")]
    pub case_insensitive: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            row_index_base: default_row_index_base(),
            column_index_base: 0,
            case_insensitive: default_case_insensitive(),
        }
    }
}

fn default_row_index_base() -> u8 {
    1
}

fn default_case_insensitive() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            downloads: DownloadsConfig::default(),
            store: StoreConfig::default(),
            table: TableConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from all sources (file, env, defaults)
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        let config: Config = Figment::new()
            // Start with defaults
            .merge(Serialized::defaults(Config::default()))
            // Merge config file if exists
            .merge(Toml::file(&config_path))
            // Merge environment variables (STEPKIT_SECTION__KEY)
            .merge(Env::prefixed("STEPKIT_").split("__"))
            .extract()
            .map_err(|e| StepkitError::ConfigError(e.to_string()))?;

        Ok(config)
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("stepkit")
            .join("config.toml")
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| StepkitError::ConfigError(e.to_string()))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Default path of the key-value store file
    pub fn store_path(&self) -> PathBuf {
        match &self.store.path {
            Some(p) => PathBuf::from(p),
            None => dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("stepkit")
                .join("store.json"),
        }
    }

    /// Directory watched by wait-file, with platform fallbacks
    pub fn downloads_dir(&self) -> PathBuf {
        match &self.downloads.dir {
            Some(d) => PathBuf::from(d),
            None => dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}
