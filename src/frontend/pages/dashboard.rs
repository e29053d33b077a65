//! Dashboard page component.

use crate::frontend::components::{LeaseCardView, PortalLayout, TenantSummary};
use crate::frontend::services::PortalState;
use crate::frontend::services::session::{DashboardState, GateDecision, check_gate, load_profile};
use crate::frontend::services::view::{DashboardView, NO_LEASES_TEXT};
use dioxus::prelude::*;
use dioxus_router::use_navigator;

#[component]
pub fn Dashboard() -> Element {
    let nav = use_navigator();
    let portal = use_context::<PortalState>();
    let mut state = use_signal(DashboardState::default);

    // Runs once per activation: nothing reactive is read here
    use_effect(move || {
        let decision = check_gate(&portal.credentials);
        state.set(DashboardState::after_gate(&decision));
        match decision {
            GateDecision::Redirect(route) => {
                nav.replace(route);
            }
            GateDecision::Proceed(token) => {
                let portal = portal.clone();
                // Task is dropped with the page, so a late response never lands
                spawn(async move {
                    let next = load_profile(&portal.api, &portal.credentials, &token).await;
                    let redirect = next.redirect_target();
                    state.set(next);
                    if let Some(route) = redirect {
                        nav.replace(route);
                    }
                });
            }
        }
    });

    let body = match &*state.read() {
        DashboardState::Idle | DashboardState::Loading | DashboardState::Redirected => rsx! {
            div { class: "loading", "Loading your leases..." }
        },
        failed @ DashboardState::Failed => {
            let message = failed.error_message().unwrap_or_default();
            rsx! {
                div { class: "load-failure", "{message}" }
            }
        }
        DashboardState::Loaded(profile) => {
            let view = DashboardView::from(profile);
            rsx! { DashboardContent { view } }
        }
    };

    rsx! {
        PortalLayout {
            signed_in: true,
            {body}
        }
    }
}

#[component]
fn DashboardContent(view: DashboardView) -> Element {
    rsx! {
        TenantSummary {
            tenant_name: view.tenant_name.clone(),
            contact_number: view.contact_number.clone(),
            badge: view.badge.clone(),
        }
        if view.shows_empty_notice() {
            div { class: "empty-notice", "{NO_LEASES_TEXT}" }
        } else {
            div {
                class: "lease-grid",
                for card in view.leases.iter().cloned() {
                    LeaseCardView { key: "{card.id}", card }
                }
            }
        }
    }
}
