//! Wire models for the tenant API.

use serde::{Deserialize, Serialize};

/// Body of `POST /login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Successful login response. The token is optional on the wire so a 2xx
/// without one can be told apart from a malformed body.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// Error body returned by the API on non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantProfile {
    pub tenant_name: String,
    pub contact_number: String,
    #[serde(default)]
    pub active_leases: Vec<Lease>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lease {
    pub id: i64,
    pub unit_name: String,
    pub rent_amount: RentAmount,
    pub end_date: String,
    #[serde(default)]
    pub contract_url: Option<String>,
}

/// Rent as sent by the API: either a JSON number or a decimal string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RentAmount {
    Number(f64),
    Text(String),
}

impl RentAmount {
    /// Coerces the amount to a finite number.
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl std::fmt::Display for RentAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl Lease {
    /// Contract link, treating a blank URL the same as a missing one.
    pub fn contract(&self) -> Option<&str> {
        self.contract_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}
