use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::models::PollQuery;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Root address of the Polly API
    pub base_url: String,

    /// Per-request timeout; the HTTP client's default applies when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Account registered by the demo run
    pub username: String,
    pub password: String,

    /// Page of polls to list
    pub skip: i64,
    pub limit: i64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: None,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        let page = PollQuery::default();
        Self {
            username: "new_user".to_string(),
            password: "secure_password".to_string(),
            skip: page.skip,
            limit: page.limit,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl DemoConfig {
    pub fn poll_query(&self) -> PollQuery {
        PollQuery::new(self.skip, self.limit)
    }
}

impl Config {
    /// Load config from the default location, falling back to defaults
    /// when no file exists
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            tracing::debug!(target: "config", "No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::debug!(target: "config", "Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Get the default config file path
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("polly-client").join("config.toml"))
    }

    /// Create a default config file with comments
    pub fn create_default_with_comments() -> String {
        r#"# Polly client configuration
# Location: ~/.config/polly-client/config.toml (Linux)
#           ~/Library/Application Support/polly-client/config.toml (macOS)
#           %APPDATA%\polly-client\config.toml (Windows)

[api]
# Root address of the Polly API (no trailing slash)
base_url = "http://localhost:8000"

# Per-request timeout in seconds (leave commented to use the HTTP client default)
# timeout_secs = 30

[demo]
# Account registered by polly-demo
username = "new_user"
password = "secure_password"

# Page of polls to list
skip = 0
limit = 10
"#
        .to_string()
    }
}
