//! Shared portal context.

use crate::backend::api::ApiClient;
use crate::backend::session::CredentialStore;
use crate::backend::utils::config::PortalConfig;

/// Handles every screen needs: the API client and the credential slot.
#[derive(Clone)]
pub struct PortalState {
    pub api: ApiClient,
    pub credentials: CredentialStore,
}

impl PortalState {
    pub fn new(config: &PortalConfig, credentials: CredentialStore) -> Self {
        Self {
            api: ApiClient::new(config),
            credentials,
        }
    }
}
