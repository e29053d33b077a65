//! Frontend services: screen flows and view models.

pub mod auth;
pub mod context;
pub mod session;
pub mod view;

pub use context::PortalState;
