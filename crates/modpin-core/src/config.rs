use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use modpin_util::errors::{ModpinError, ModpinResult};

/// Conventional name of the per-project configuration file.
pub const CONFIG_FILE_NAME: &str = "modpin.toml";

/// Project configuration loaded from `modpin.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModpinConfig {
    /// Default registry source (file path or `http(s)://` URL).
    #[serde(default)]
    pub registry: Option<String>,

    #[serde(default)]
    pub network: NetworkConfig,
}

/// HTTP settings from `[network]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default = "default_timeout_secs", rename = "timeout-secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent", rename = "user-agent")]
    pub user_agent: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("modpin/{}", env!("CARGO_PKG_VERSION"))
}

impl ModpinConfig {
    /// Load and parse a config file.
    pub fn from_path(path: &Path) -> ModpinResult<Self> {
        let content =
            modpin_util::fs::read_to_string(path).map_err(|e| ModpinError::Config {
                message: format!("Failed to read config: {e}"),
            })?;
        toml::from_str(&content).map_err(|e| ModpinError::Config {
            message: format!("Failed to parse {}: {e}", path.display()),
        })
    }

    /// Search `start` and its ancestors for `modpin.toml`; return defaults if none exists.
    pub fn discover(start: &Path) -> ModpinResult<Self> {
        match Self::find(start) {
            Some(path) => {
                tracing::debug!("Using config {}", path.display());
                Self::from_path(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Location of the nearest `modpin.toml`, if any.
    pub fn find(start: &Path) -> Option<PathBuf> {
        modpin_util::fs::find_file_upwards(start, CONFIG_FILE_NAME)
    }
}

/// Where a registry document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrySource {
    File(PathBuf),
    Url(String),
}

impl RegistrySource {
    /// Classify a user-supplied source: `http://` and `https://` are URLs,
    /// everything else is a filesystem path.
    pub fn parse(source: &str) -> Self {
        let lower = source.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(source.to_string())
        } else {
            Self::File(PathBuf::from(source))
        }
    }
}

impl std::fmt::Display for RegistrySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}
