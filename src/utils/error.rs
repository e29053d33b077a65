//! Error handling.

use std::fmt;

/// Message shown when the login endpoint gives no readable reason.
pub const LOGIN_FALLBACK_MESSAGE: &str = "Something went wrong.";

/// Message shown in place of the dashboard for any non-401 failure.
pub const LOAD_FAILURE_MESSAGE: &str =
    "We couldn't load your dashboard right now. Please reload or sign out and try again.";

/// The only failure kinds a screen ever surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortalError {
    /// No credential, or the server rejected it. Resolved by redirect, never shown.
    Unauthenticated,
    /// Login failed; carries the server-supplied or fallback text.
    Submission(String),
    /// Dashboard fetch failed for any reason other than a rejected credential.
    Load,
}

impl PortalError {
    /// Builds a submission error from an optional server message.
    pub fn submission(message: Option<String>) -> Self {
        let message = message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| LOGIN_FALLBACK_MESSAGE.to_string());
        Self::Submission(message)
    }

    /// Text to display to the user, if this kind is ever displayed.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::Unauthenticated => None,
            Self::Submission(message) => Some(message),
            Self::Load => Some(LOAD_FAILURE_MESSAGE),
        }
    }
}

impl fmt::Display for PortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthenticated => write!(f, "Session is missing or expired"),
            Self::Submission(message) => write!(f, "Login failed: {message}"),
            Self::Load => write!(f, "Dashboard failed to load"),
        }
    }
}

impl std::error::Error for PortalError {}
