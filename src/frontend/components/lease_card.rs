//! Single lease card.

use crate::frontend::services::view::{ContractView, LeaseCard, NO_CONTRACT_TEXT};
use dioxus::prelude::*;

fn open_contract(url: &str) {
    log::info!("Opening contract {url}");
    if let Err(e) = webbrowser::open(url) {
        log::warn!("Failed to open contract link: {e}");
    }
}

#[component]
pub fn LeaseCardView(card: LeaseCard) -> Element {
    let contract = match &card.contract {
        ContractView::Link(url) => {
            let target = url.clone();
            rsx! {
                a {
                    class: "contract-link",
                    href: "{url}",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        open_contract(&target);
                    },
                    "View contract"
                }
            }
        }
        ContractView::NotUploaded => rsx! {
            span { class: "contract-missing", "{NO_CONTRACT_TEXT}" }
        },
    };

    rsx! {
        article {
            class: "lease-card",
            h2 { "{card.unit_name}" }
            div {
                class: "lease-row",
                span { class: "lease-label", "Rent" }
                span { class: "lease-rent", "{card.rent}" }
            }
            div {
                class: "lease-row",
                span { class: "lease-label", "Ends" }
                span { class: "lease-end", "{card.end_date}" }
            }
            div {
                class: "lease-row",
                span { class: "lease-label", "Contract" }
                {contract}
            }
        }
    }
}
