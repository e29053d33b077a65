//! UI components.

pub mod layout;
pub mod lease_card;
pub mod summary;

pub use layout::PortalLayout;
pub use lease_card::LeaseCardView;
pub use summary::TenantSummary;
