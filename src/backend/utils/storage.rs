//! Persistent key-value storage backed by a JSON file.
//!
//! Every call re-reads the file, so two handles on the same path always
//! agree and a restart sees the last write.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the value stored under `key`.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    /// Stores `value` under `key`, replacing any previous value. An
    /// unreadable file is replaced.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_for_write();
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    /// Removes `key`. Removing a missing key is not an error; an unreadable
    /// file is reset to empty.
    pub fn remove(&self, key: &str) -> Result<()> {
        match self.read_all() {
            Ok(mut entries) => {
                if entries.remove(key).is_some() {
                    self.write_all(&entries)?;
                }
                Ok(())
            }
            Err(e) => {
                log::warn!("Resetting unreadable storage: {e:#}");
                self.write_all(&BTreeMap::new())
            }
        }
    }

    fn read_for_write(&self) -> BTreeMap<String, String> {
        self.read_all().unwrap_or_else(|e| {
            log::warn!("Replacing unreadable storage: {e:#}");
            BTreeMap::new()
        })
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.path.display()))
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        // Write beside the target, then rename over it
        let json = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).with_context(|| format!("Failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))
    }
}
