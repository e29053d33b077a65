mod backend;
mod frontend;
mod utils;

use crate::backend::session::CredentialStore;
use crate::backend::utils::config::PortalConfig;
use crate::backend::utils::paths::{get_config_path, get_storage_path};
use crate::backend::utils::storage::LocalStorage;
use crate::frontend::app::App;
use crate::frontend::services::PortalState;
use dioxus::LaunchBuilder;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
use std::sync::OnceLock;
use tokio::runtime::Runtime;

static RUNTIME: OnceLock<Runtime> = OnceLock::new();

fn load_config() -> PortalConfig {
    match get_config_path().and_then(|path| PortalConfig::load(&path)) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load config, using defaults: {e:#}");
            PortalConfig::default()
        }
    }
}

fn credential_store() -> CredentialStore {
    match get_storage_path() {
        Ok(path) => CredentialStore::new(LocalStorage::new(path)),
        Err(e) => {
            log::error!("No data directory, sign-in will not be saved: {e:#}");
            CredentialStore::unavailable()
        }
    }
}

fn main() {
    utils::logging::init();

    let config = load_config();
    log::info!("API base: {}", config.api_base_url);
    log::info!("Login endpoint: {}", config.login_url);

    // reqwest needs a tokio reactor behind the UI executor
    let runtime = RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("Failed to create runtime")
    });
    let _guard = runtime.enter();

    let portal = PortalState::new(&config, credential_store());

    let size = LogicalSize::new(config.window.width, config.window.height);
    let desktop = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title("Tenant Portal")
                .with_inner_size(size)
                .with_min_inner_size(LogicalSize::new(720.0, 560.0))
                .with_resizable(config.window.resizable),
        )
        .with_menu(None);

    LaunchBuilder::new()
        .with_cfg(desktop)
        .with_context(portal)
        .launch(App);
}
