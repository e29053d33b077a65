//! Tenant API client and wire models.

pub mod client;
pub mod models;

pub use client::{ApiClient, ApiError};
pub use models::{Lease, RentAmount, TenantProfile};
