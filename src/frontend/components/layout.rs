//! Page shell shared by the login and dashboard screens.

use crate::frontend::assets::ResourceLoader;
use crate::frontend::services::PortalState;
use crate::frontend::services::session::sign_out;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

#[component]
pub fn PortalLayout(children: Element, #[props(default)] signed_in: bool) -> Element {
    let nav = use_navigator();
    let portal = use_context::<PortalState>();

    let on_sign_out = move |_: MouseEvent| {
        let route = sign_out(&portal.credentials);
        nav.replace(route);
    };

    rsx! {
        style { dangerous_inner_html: ResourceLoader::get_portal_css() }

        header {
            class: "portal-header",
            span { class: "portal-title", "Tenant Portal" }
            if signed_in {
                button {
                    class: "sign-out",
                    onclick: on_sign_out,
                    "Sign out"
                }
            }
        }

        main {
            class: "portal-main",
            {children}
        }
    }
}
