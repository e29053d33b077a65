//! Application routing system.

use crate::frontend::pages::{Dashboard, Login};

use dioxus::prelude::*;
use dioxus_router::Routable;

/// Main routing enum for the application.
#[derive(Clone, Routable, Debug, PartialEq, Eq)]
pub enum Route {
    /// Entry screen with the login form.
    #[route("/")]
    Login {},
    /// Protected lease dashboard.
    #[route("/dashboard")]
    Dashboard {},
}
