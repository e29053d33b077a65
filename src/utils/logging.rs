//! Minimal logging setup.

use env_logger::Env;

/// Default filter when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "warn";

/// Initializes the global logger. Safe to call more than once.
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .format_timestamp_millis()
        .try_init();
}

/// Masks a credential for diagnostics, keeping only its length.
pub fn redact(secret: &str) -> String {
    format!("<redacted:{}>", secret.len())
}
