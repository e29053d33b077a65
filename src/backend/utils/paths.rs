//! Path utilities.

use std::path::PathBuf;

use anyhow::Result;

/// Name of the portal data directory.
const PORTAL_DIR: &str = "TenantPortal";

/// Environment variable that overrides the portal data directory.
pub const PORTAL_HOME_ENV: &str = "PORTAL_HOME";

/// Get the base portal directory (`TenantPortal`).
#[inline]
pub fn get_portal_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(PORTAL_HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }

    let base_dir = match std::env::consts::OS {
        "windows" => std::env::var("APPDATA")
            .ok()
            .map(PathBuf::from)
            .ok_or_else(|| anyhow::anyhow!("Could not determine AppData directory"))?,
        "macos" => std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Application Support"))
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?,
        _ => std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".local/share"))
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?,
    };
    Ok(base_dir.join(PORTAL_DIR))
}

/// Path to the portal configuration file.
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_portal_dir()?.join("config.json"))
}

/// Path to the local key-value storage file.
pub fn get_storage_path() -> Result<PathBuf> {
    Ok(get_portal_dir()?.join("storage.json"))
}
