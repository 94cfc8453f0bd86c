use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

/// Root configuration structure, deserialized from `.license-viewr/config.toml`.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Where license records are read from.
    #[serde(default)]
    pub source: SourceConfig,
}

/// Data-source settings.
#[derive(Debug, Deserialize)]
pub struct SourceConfig {
    /// Base URL of the HTTP license backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Local JSON store directory; when set, it takes precedence over the
    /// HTTP backend.
    #[serde(default)]
    pub store_path: Option<PathBuf>,
    /// Request timeout for the HTTP backend, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            base_url: default_base_url(),
            store_path: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for Config {
    /// Built-in defaults used when no config file is found: a local HTTP
    /// backend with a 10 second timeout and no store directory.
    fn default() -> Self {
        Config {
            source: SourceConfig::default(),
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `./.license-viewr/config.toml`
/// 3. `~/.config/license-viewr/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        let content = std::fs::read_to_string(path)?;
        return Ok(toml::from_str(&content)?);
    }

    let local_config = Path::new(".license-viewr").join("config.toml");
    if local_config.exists() {
        let content = std::fs::read_to_string(&local_config)?;
        return Ok(toml::from_str(&content)?);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("license-viewr")
            .join("config.toml");
        if home_config.exists() {
            let content = std::fs::read_to_string(&home_config)?;
            return Ok(toml::from_str(&content)?);
        }
    }

    Ok(Config::default())
}
