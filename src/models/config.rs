use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "userdir.toml";

/// Configuration loaded from userdir.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Users API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Collection endpoint; per-user endpoints are `{url}/{id}`
    #[serde(default = "default_api_url")]
    pub url: String,
    /// Request timeout in seconds. Unset leaves the transport default in place.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            timeout_seconds: None,
        }
    }
}

impl ApiConfig {
    /// Collection endpoint without a trailing slash
    pub fn collection_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

fn default_api_url() -> String {
    "http://localhost:5000/api/users".to_string()
}

/// Table rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Cells wider than this are cut and suffixed with an ellipsis
    #[serde(default = "default_max_column_width")]
    pub max_column_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_column_width: default_max_column_width(),
        }
    }
}

fn default_max_column_width() -> usize {
    40
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e))?;
        toml::from_str(&contents).map_err(|e| ConfigError::ParseError(path.to_path_buf(), e))
    }

    /// Try to load config from userdir.toml in the given directory
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Merge CLI overrides into the config
    pub fn with_overrides(mut self, url: Option<String>, timeout: Option<u64>) -> Self {
        if let Some(u) = url {
            self.api.url = u;
        }
        if let Some(t) = timeout {
            self.api.timeout_seconds = Some(t);
        }
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(PathBuf, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(PathBuf, toml::de::Error),
}
