//! Session gate and dashboard fetch.

use crate::backend::api::{ApiClient, ApiError, TenantProfile};
use crate::backend::session::CredentialStore;
use crate::frontend::app::route::Route;
use crate::utils::PortalError;
use crate::utils::error::LOAD_FAILURE_MESSAGE;

/// Result of checking the credential slot on entry to a protected view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// No credential; leave for the given route without touching the network.
    Redirect(Route),
    /// Proceed with this bearer token.
    Proceed(String),
}

/// Reads the credential slot once and decides whether the view may load.
pub fn check_gate(credentials: &CredentialStore) -> GateDecision {
    match credentials.get() {
        Some(token) => GateDecision::Proceed(token),
        None => {
            log::info!("No credential present, redirecting to login");
            GateDecision::Redirect(Route::Login {})
        }
    }
}

/// Lifecycle of one dashboard activation.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DashboardState {
    #[default]
    Idle,
    Loading,
    Loaded(TenantProfile),
    Redirected,
    Failed,
}

impl DashboardState {
    /// State the screen enters right after the gate check.
    pub fn after_gate(decision: &GateDecision) -> Self {
        match decision {
            GateDecision::Redirect(_) => Self::Redirected,
            GateDecision::Proceed(_) => Self::Loading,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Loaded(_) | Self::Redirected | Self::Failed)
    }

    /// Where the screen must go after entering this state, if anywhere.
    pub fn redirect_target(&self) -> Option<Route> {
        matches!(self, Self::Redirected).then_some(Route::Login {})
    }

    /// Message shown in place of the dashboard, if any.
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Failed => Some(LOAD_FAILURE_MESSAGE),
            _ => None,
        }
    }
}

/// Issues the single profile request for this activation.
///
/// A 401 clears the credential and yields [`DashboardState::Redirected`];
/// every other failure yields [`DashboardState::Failed`].
pub async fn load_profile(
    api: &ApiClient,
    credentials: &CredentialStore,
    token: &str,
) -> DashboardState {
    let result = api.dashboard(token).await.map_err(|e| match e {
        ApiError::Unauthorized => PortalError::Unauthenticated,
        other => {
            log::error!("Dashboard failed to load: {other}");
            PortalError::Load
        }
    });

    match result {
        Ok(profile) => {
            log::info!(
                "Dashboard loaded with {} active lease(s)",
                profile.active_leases.len()
            );
            DashboardState::Loaded(profile)
        }
        Err(PortalError::Unauthenticated) => {
            log::info!("Credential rejected, signing out");
            credentials.clear();
            DashboardState::Redirected
        }
        Err(_) => DashboardState::Failed,
    }
}

/// Clears the credential and returns the entry route.
pub fn sign_out(credentials: &CredentialStore) -> Route {
    log::info!("Signing out");
    credentials.clear();
    Route::Login {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::api::RentAmount;
    use crate::backend::utils::config::PortalConfig;
    use crate::backend::utils::storage::LocalStorage;
    use serde_json::json;
    use std::time::Duration;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn setup(server: &MockServer, dir: &TempDir) -> (ApiClient, CredentialStore) {
        let config = PortalConfig {
            api_base_url: server.uri(),
            login_url: format!("{}/login", server.uri()),
            ..PortalConfig::default()
        };
        let store = CredentialStore::new(LocalStorage::new(dir.path().join("storage.json")));
        (ApiClient::new(&config), store)
    }

    /// One dashboard activation: gate, then at most one fetch.
    async fn activate(api: &ApiClient, store: &CredentialStore) -> DashboardState {
        let decision = check_gate(store);
        let state = DashboardState::after_gate(&decision);
        match decision {
            GateDecision::Redirect(_) => state,
            GateDecision::Proceed(token) => {
                assert_eq!(state, DashboardState::Loading);
                load_profile(api, store, &token).await
            }
        }
    }

    #[tokio::test]
    async fn absent_or_empty_credential_never_fetches() {
        let server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        Mock::given(method("GET"))
            .and(path("/tenant/dashboard"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let (api, store) = setup(&server, &dir);

        assert_eq!(check_gate(&store), GateDecision::Redirect(Route::Login {}));
        assert_eq!(activate(&api, &store).await, DashboardState::Redirected);

        store.set("").unwrap();
        assert_eq!(activate(&api, &store).await, DashboardState::Redirected);
        assert_eq!(
            DashboardState::Redirected.redirect_target().map(|r| r.to_string()),
            Some("/".to_string())
        );
    }

    #[tokio::test]
    async fn loads_profile_with_stored_credential() {
        let server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        Mock::given(method("GET"))
            .and(path("/tenant/dashboard"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "tenant_name": "J",
                "contact_number": "555",
                "active_leases": [{
                    "id": 1,
                    "unit_name": "A1",
                    "rent_amount": "120000",
                    "end_date": "2025-12-31",
                    "contract_url": null
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (api, store) = setup(&server, &dir);
        store.set("abc").unwrap();

        let DashboardState::Loaded(profile) = activate(&api, &store).await else {
            panic!("expected profile to load");
        };
        assert_eq!(profile.tenant_name, "J");
        assert_eq!(
            profile.active_leases[0].rent_amount,
            RentAmount::Text("120000".into())
        );
        assert_eq!(store.get().as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn unauthorized_clears_credential_and_redirects() {
        let server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        Mock::given(method("GET"))
            .and(path("/tenant/dashboard"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Unauthenticated."})))
            .expect(1)
            .mount(&server)
            .await;

        let (api, store) = setup(&server, &dir);
        store.set("stale").unwrap();

        let state = activate(&api, &store).await;

        assert_eq!(state, DashboardState::Redirected);
        assert_eq!(state.error_message(), None);
        assert_eq!(state.redirect_target(), Some(Route::Login {}));
        assert_eq!(store.get(), None);
    }

    #[tokio::test]
    async fn other_failures_keep_credential_and_show_static_message() {
        let server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        Mock::given(method("GET"))
            .and(path("/tenant/dashboard"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let (api, store) = setup(&server, &dir);
        store.set("abc").unwrap();

        let state = activate(&api, &store).await;

        assert_eq!(state, DashboardState::Failed);
        assert!(state.error_message().is_some());
        assert_eq!(state.redirect_target(), None);
        assert_eq!(store.get().as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn malformed_body_is_a_load_failure() {
        let server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        Mock::given(method("GET"))
            .and(path("/tenant/dashboard"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tenant": "?"})))
            .mount(&server)
            .await;

        let (api, store) = setup(&server, &dir);
        store.set("abc").unwrap();

        assert_eq!(activate(&api, &store).await, DashboardState::Failed);
    }

    #[tokio::test]
    async fn hung_request_stays_loading() {
        let server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        Mock::given(method("GET"))
            .and(path("/tenant/dashboard"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_secs(30))
                    .set_body_json(json!({"tenant_name": "J", "contact_number": "555", "active_leases": []})),
            )
            .mount(&server)
            .await;

        let (api, store) = setup(&server, &dir);
        store.set("abc").unwrap();

        let decision = check_gate(&store);
        let state = DashboardState::after_gate(&decision);
        assert_eq!(state, DashboardState::Loading);
        assert!(!state.is_terminal());

        let GateDecision::Proceed(token) = decision else {
            panic!("expected the gate to pass");
        };
        let pending = tokio::time::timeout(
            Duration::from_millis(300),
            load_profile(&api, &store, &token),
        )
        .await;

        assert!(pending.is_err(), "request should still be in flight");
        assert_eq!(store.get().as_deref(), Some("abc"));
    }

    #[test]
    fn after_gate_states() {
        assert_eq!(
            DashboardState::after_gate(&GateDecision::Redirect(Route::Login {})),
            DashboardState::Redirected
        );
        assert_eq!(
            DashboardState::after_gate(&GateDecision::Proceed("abc".into())),
            DashboardState::Loading
        );
    }

    #[test]
    fn sign_out_clears_and_returns_entry_route() {
        let dir = TempDir::new().unwrap();
        let store = CredentialStore::new(LocalStorage::new(dir.path().join("storage.json")));
        store.set("abc").unwrap();

        assert_eq!(sign_out(&store), Route::Login {});
        assert_eq!(store.get(), None);
    }

    #[test]
    fn terminal_states() {
        assert!(!DashboardState::Idle.is_terminal());
        assert!(!DashboardState::Loading.is_terminal());
        assert!(DashboardState::Failed.is_terminal());
        assert!(DashboardState::Redirected.is_terminal());
    }
}
