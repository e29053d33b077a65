//! Backend of the application.

pub mod api;
pub mod session;
pub mod utils;
