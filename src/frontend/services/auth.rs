//! Login flow.

use crate::backend::api::ApiClient;
use crate::backend::session::CredentialStore;
use crate::frontend::app::route::Route;
use crate::utils::PortalError;

/// State of the login form between keystrokes and responses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub busy: bool,
    pub error: Option<String>,
}

impl LoginForm {
    /// Marks a submission in flight. Returns `false` if one already is.
    pub fn begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        self.error = None;
        true
    }

    /// Records a failed submission and re-enables the form.
    pub fn fail(&mut self, err: &PortalError) {
        self.busy = false;
        self.error = err.user_message().map(str::to_string);
    }
}

/// Exchanges credentials for a token and persists it.
///
/// Returns the route to navigate to on success. Every failure, whatever its
/// cause, comes back as [`PortalError::Submission`].
pub async fn submit_credentials(
    api: &ApiClient,
    credentials: &CredentialStore,
    email: &str,
    password: &str,
) -> Result<Route, PortalError> {
    log::debug!("Submitting login for {email}");

    let token = api.login(email, password).await.map_err(|e| {
        log::warn!("Login failed: {e}");
        PortalError::submission(e.server_message())
    })?;

    credentials.set(&token).map_err(|e| {
        log::error!("Could not persist credential: {e:#}");
        PortalError::submission(None)
    })?;

    log::info!("Login succeeded");
    Ok(Route::Dashboard {})
}
