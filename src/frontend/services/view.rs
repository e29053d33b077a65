//! Display-ready view of a tenant profile.

use crate::backend::api::{Lease, TenantProfile};
use crate::backend::utils::formater::{format_end_date, format_rent, lease_badge};

pub const NO_CONTRACT_TEXT: &str = "No contract uploaded";
pub const NO_LEASES_TEXT: &str = "You have no active leases at the moment.";

/// Contract area of a lease card: always exactly one of the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractView {
    Link(String),
    NotUploaded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaseCard {
    pub id: i64,
    pub unit_name: String,
    pub rent: String,
    pub end_date: String,
    pub contract: ContractView,
}

impl From<&Lease> for LeaseCard {
    fn from(lease: &Lease) -> Self {
        let contract = match lease.contract() {
            Some(url) => ContractView::Link(url.to_string()),
            None => ContractView::NotUploaded,
        };

        Self {
            id: lease.id,
            unit_name: lease.unit_name.clone(),
            rent: format_rent(&lease.rent_amount),
            end_date: format_end_date(&lease.end_date),
            contract,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub tenant_name: String,
    pub contact_number: String,
    pub badge: String,
    pub leases: Vec<LeaseCard>,
}

impl DashboardView {
    /// Whether to show the "no active leases" notice instead of cards.
    pub fn shows_empty_notice(&self) -> bool {
        self.leases.is_empty()
    }
}

impl From<&TenantProfile> for DashboardView {
    fn from(profile: &TenantProfile) -> Self {
        Self {
            tenant_name: profile.tenant_name.clone(),
            contact_number: profile.contact_number.clone(),
            badge: lease_badge(profile.active_leases.len()),
            leases: profile.active_leases.iter().map(LeaseCard::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::api::RentAmount;

    fn lease(id: i64, contract_url: Option<&str>) -> Lease {
        Lease {
            id,
            unit_name: format!("Unit {id}"),
            rent_amount: RentAmount::Number(50000.0),
            end_date: "2026-01-15".into(),
            contract_url: contract_url.map(str::to_string),
        }
    }

    fn profile(leases: Vec<Lease>) -> TenantProfile {
        TenantProfile {
            tenant_name: "J".into(),
            contact_number: "555".into(),
            active_leases: leases,
        }
    }

    #[test]
    fn empty_profile_shows_notice_and_no_cards() {
        let view = DashboardView::from(&profile(vec![]));
        assert!(view.shows_empty_notice());
        assert!(view.leases.is_empty());
        assert_eq!(view.badge, "0 Active Leases");
    }

    #[test]
    fn badge_is_singular_for_one_lease() {
        let view = DashboardView::from(&profile(vec![lease(1, None)]));
        assert_eq!(view.badge, "1 Active Lease");
        assert!(!view.shows_empty_notice());
    }

    #[test]
    fn badge_is_plural_for_several_leases() {
        let view = DashboardView::from(&profile(vec![
            lease(1, None),
            lease(2, Some("https://files.example/2.pdf")),
            lease(3, None),
        ]));
        assert_eq!(view.badge, "3 Active Leases");
        assert_eq!(view.leases.len(), 3);
    }

    #[test]
    fn each_card_has_exactly_one_contract_state() {
        let view = DashboardView::from(&profile(vec![
            lease(1, None),
            lease(2, Some("https://files.example/2.pdf")),
            lease(3, Some("")),
        ]));

        let contracts: Vec<_> = view.leases.iter().map(|c| c.contract.clone()).collect();
        assert_eq!(
            contracts,
            vec![
                ContractView::NotUploaded,
                ContractView::Link("https://files.example/2.pdf".into()),
                ContractView::NotUploaded,
            ]
        );
    }

    #[test]
    fn renders_reference_lease() {
        let lease = Lease {
            id: 1,
            unit_name: "A1".into(),
            rent_amount: RentAmount::Text("120000".into()),
            end_date: "2025-12-31".into(),
            contract_url: None,
        };

        let card = LeaseCard::from(&lease);
        assert_eq!(card.unit_name, "A1");
        assert_eq!(card.rent, "AED 120,000");
        assert_eq!(card.end_date, "31 December 2025");
        assert_eq!(card.contract, ContractView::NotUploaded);
    }
}
