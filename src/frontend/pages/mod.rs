//! Application pages.

pub mod dashboard;
pub mod login;

pub use dashboard::Dashboard;
pub use login::Login;
