//! Frontend module for the `TenantPortal` application.

pub mod app;
pub mod assets;
pub mod components;
pub mod pages;
pub mod services;
