//! The persisted credential slot.
//!
//! All reads and writes of the bearer token go through [`CredentialStore`];
//! nothing else touches the underlying storage key.

use crate::backend::utils::storage::LocalStorage;
use crate::utils::logging::redact;
use anyhow::Result;

/// Fixed storage key of the credential slot.
pub const CREDENTIAL_KEY: &str = "token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialStore {
    storage: Option<LocalStorage>,
}

impl CredentialStore {
    pub fn new(storage: LocalStorage) -> Self {
        Self {
            storage: Some(storage),
        }
    }

    /// A slot with no backing storage: always empty, refuses writes.
    pub fn unavailable() -> Self {
        Self { storage: None }
    }

    /// Returns the stored token. Empty values and unreadable storage count as
    /// no credential.
    pub fn get(&self) -> Option<String> {
        match self.storage.as_ref()?.get(CREDENTIAL_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                log::warn!("Credential slot unreadable, treating as signed out: {e:#}");
                None
            }
        }
    }

    /// Replaces the stored token.
    pub fn set(&self, token: &str) -> Result<()> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Credential storage is unavailable"))?;
        log::debug!("Storing credential {}", redact(token));
        storage.set(CREDENTIAL_KEY, token)
    }

    /// Clears the slot. Failure is logged, since every caller is already
    /// leaving the protected view.
    pub fn clear(&self) {
        let Some(storage) = &self.storage else {
            return;
        };
        if let Err(e) = storage.remove(CREDENTIAL_KEY) {
            log::warn!("Failed to clear credential: {e:#}");
        }
    }
}
