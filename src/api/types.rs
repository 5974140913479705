//! API query and error types.

use serde::{Deserialize, Serialize};

use crate::session::UserType;

/// Query parameters for `/energy-series`.
#[derive(Debug, Deserialize)]
pub struct SeriesQuery {
    /// Series length in hours (default: configured `series.hours`).
    pub hours: Option<usize>,
    /// Random seed for a reproducible response.
    pub seed: Option<u64>,
}

/// Query parameters for `/marketplace`.
#[derive(Debug, Deserialize)]
pub struct MarketplaceQuery {
    /// Postal code (default: configured session postal code).
    pub postal_code: Option<String>,
    pub seed: Option<u64>,
}

/// Query parameters for `/quote`.
#[derive(Debug, Deserialize)]
pub struct QuoteQuery {
    pub postal_code: Option<String>,
    /// Amount in kWh (default: configured `market.default_order_kwh`).
    pub amount: Option<u32>,
}

/// Query parameters for `/dashboard`.
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub user_type: Option<UserType>,
    pub postal_code: Option<String>,
    /// Render the logged-out landing page when `false`.
    pub logged_in: Option<bool>,
    pub seed: Option<u64>,
}

/// Error response body for 4xx/5xx errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
