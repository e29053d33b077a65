//! Application root and routing.

pub mod route;

use dioxus::prelude::*;
use dioxus_router::Router;
use route::Route;

#[component]
pub fn App() -> Element {
    rsx! { Router::<Route> {} }
}
