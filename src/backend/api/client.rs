//! HTTP client for the tenant API.

use super::models::{ErrorBody, LoginRequest, LoginResponse, TenantProfile};
use crate::backend::utils::config::PortalConfig;
use reqwest::{StatusCode, header};
use std::fmt;

/// Failures at the HTTP boundary, before they are folded into screen errors.
#[derive(Debug)]
pub enum ApiError {
    /// The server answered 401.
    Unauthorized,
    /// Any other non-2xx status, with the body's `message` when readable.
    Status {
        status: StatusCode,
        message: Option<String>,
    },
    /// Login returned 2xx without a token.
    MissingToken,
    /// The request never completed.
    Transport(reqwest::Error),
    /// The body did not match the expected shape.
    Decode(String),
}

impl ApiError {
    /// Server-supplied message, if any.
    pub fn server_message(&self) -> Option<String> {
        match self {
            Self::Status { message, .. } => message.clone(),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthorized => write!(f, "Unauthorized"),
            Self::Status { status, message } => match message {
                Some(message) => write!(f, "Request failed with status {status}: {message}"),
                None => write!(f, "Request failed with status {status}"),
            },
            Self::MissingToken => write!(f, "Login response did not include a token"),
            Self::Transport(err) => write!(f, "Network error: {err}"),
            Self::Decode(err) => write!(f, "Unexpected response body: {err}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err)
        }
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    login_url: String,
    dashboard_url: String,
}

impl ApiClient {
    pub fn new(config: &PortalConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            login_url: config.login_url.clone(),
            dashboard_url: config.dashboard_url(),
        }
    }

    /// Exchanges credentials for a bearer token.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<String> {
        log::debug!("POST {}", self.login_url);

        let response = self
            .http
            .post(&self.login_url)
            .header(header::ACCEPT, "application/json")
            .json(&LoginRequest { email, password })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(status, response).await);
        }

        let body: LoginResponse = response.json().await?;
        body.token.ok_or(ApiError::MissingToken)
    }

    /// Fetches the tenant profile for the given bearer token.
    pub async fn dashboard(&self, token: &str) -> ApiResult<TenantProfile> {
        log::debug!("GET {}", self.dashboard_url);

        let response = self
            .http
            .get(&self.dashboard_url)
            .bearer_auth(token)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            return Err(Self::status_error(status, response).await);
        }

        Ok(response.json().await?)
    }

    async fn status_error(status: StatusCode, response: reqwest::Response) -> ApiError {
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        ApiError::Status { status, message }
    }
}
