//! Persistent settings and API base resolution.
//!
//! The settings file lives at `<config dir>/lobster-explorer/config.json`:
//! - Linux: `~/.config/lobster-explorer/config.json`
//! - macOS: `~/Library/Application Support/lobster-explorer/config.json`
//! - Windows: `%APPDATA%/lobster-explorer/config.json`

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::client::{ApiConfig, HttpConfig};
use crate::constants::{DEFAULT_API_BASE, DEFAULT_REQUEST_TIMEOUT_SECS};

const APP_NAME: &str = "lobster-explorer";

const CONFIG_FILE: &str = "config.json";

const fn default_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the transfers backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined.
    pub fn config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads the configuration, falling back to defaults.
    ///
    /// A missing file is the normal case and is silent. An unreadable or
    /// malformed file is logged and ignored.
    #[must_use]
    pub fn load() -> Self {
        let path = match Self::config_path() {
            Ok(path) => path,
            Err(err) => {
                tracing::warn!(%err, "no config directory, using defaults");
                return Self::default();
            }
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::try_load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "config load failed, using defaults");
                Self::default()
            }
        }
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        let content = fs::read_to_string(&path)?;
        Self::from_json(&content)
    }

    /// # Errors
    ///
    /// Returns an error if `content` is not a valid settings document.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Writes the configuration, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// The same settings with the API base pinned to `api`.
    #[must_use]
    pub fn with_api_base(self, api: &ApiConfig) -> Self {
        Self {
            api_base_url: Some(api.base_url().to_string()),
            ..self
        }
    }

    /// HTTP settings derived from this configuration. Zero means default.
    #[must_use]
    pub fn http_config(&self) -> HttpConfig {
        let secs = match self.request_timeout_secs {
            0 => DEFAULT_REQUEST_TIMEOUT_SECS,
            secs => secs,
        };
        HttpConfig::with_timeout(Duration::from_secs(secs))
    }

    /// Picks the API base: explicit flag (or its env var), then the file,
    /// then the built-in default. Blank values are skipped.
    #[must_use]
    pub fn resolve_api(&self, flag: Option<&str>) -> ApiConfig {
        let base = [flag, self.api_base_url.as_deref()]
            .into_iter()
            .flatten()
            .find(|value| !value.trim().is_empty())
            .unwrap_or(DEFAULT_API_BASE);
        ApiConfig::new(base)
    }
}

// ============================================================================
// Tests
// ============================================================================
