//! Tenant greeting and lease count badge.

use dioxus::prelude::*;

#[component]
pub fn TenantSummary(tenant_name: String, contact_number: String, badge: String) -> Element {
    rsx! {
        section {
            class: "dashboard-summary",
            div {
                h1 { "Welcome back, {tenant_name}" }
                span { class: "contact-number", "{contact_number}" }
            }
            span { class: "lease-badge", "{badge}" }
        }
    }
}
