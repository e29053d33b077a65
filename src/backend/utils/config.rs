use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use std::fs;
use std::path::Path;

/// Overrides the dashboard API base URL.
pub const API_BASE_URL_ENV: &str = "PORTAL_API_BASE_URL";
/// Overrides the login endpoint URL.
pub const LOGIN_URL_ENV: &str = "PORTAL_LOGIN_URL";

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
const DEFAULT_LOGIN_URL: &str = "http://localhost:8000/api/login";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Base for authenticated API calls, e.g. `{api_base_url}/tenant/dashboard`.
    pub api_base_url: String,
    /// Full login endpoint. Configured on its own, not derived from `api_base_url`.
    pub login_url: String,
    pub window: WindowConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
    pub resizable: bool,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            login_url: DEFAULT_LOGIN_URL.to_string(),
            window: WindowConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1100.0,
            height: 760.0,
            resizable: true,
        }
    }
}

impl PortalConfig {
    /// Loads defaults, then the config file if present, then env overrides.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = Self::from_file(path)?.unwrap_or_default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config.normalize();
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(None);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(Some(config))
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_empty(API_BASE_URL_ENV) {
            log::info!("API base URL overridden by {API_BASE_URL_ENV}");
            self.api_base_url = url;
        }
        if let Some(url) = non_empty(LOGIN_URL_ENV) {
            log::info!("Login URL overridden by {LOGIN_URL_ENV}");
            self.login_url = url;
        }
    }

    fn normalize(&mut self) {
        self.api_base_url = self.api_base_url.trim().trim_end_matches('/').to_string();
        self.login_url = self.login_url.trim().to_string();
    }

    /// Full URL of the dashboard endpoint.
    pub fn dashboard_url(&self) -> String {
        format!("{}/tenant/dashboard", self.api_base_url)
    }
}
