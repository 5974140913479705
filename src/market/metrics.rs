//! One-line derivations applied when a view is assembled.
//!
//! Every result is rounded to two decimals. The business constants come from
//! [`MarketConfig`].

use crate::config::MarketConfig;
use crate::location::LocationRecord;
use crate::series::{EnergySample, round_dp};

/// Prosumer earnings for one sample: `surplus * price * sellable_fraction`.
pub fn earnings(sample: &EnergySample, cfg: &MarketConfig) -> f64 {
    round_dp(
        sample.surplus_kwh * sample.price_per_kwh * cfg.sellable_fraction,
        2,
    )
}

/// CO2 avoided by `energy_kwh` of solar energy (kg).
pub fn carbon_offset_kg(energy_kwh: f64, cfg: &MarketConfig) -> f64 {
    round_dp(energy_kwh * cfg.carbon_offset_kg_per_kwh, 2)
}

/// Grid price minus green price (currency per kWh). Negative when the grid
/// is cheaper.
pub fn savings_per_kwh(location: &LocationRecord, cfg: &MarketConfig) -> f64 {
    round_dp(location.grid_price - cfg.green_price_per_kwh, 2)
}

/// Savings from buying `amount_kwh` of green energy instead of grid energy.
pub fn savings(location: &LocationRecord, amount_kwh: f64, cfg: &MarketConfig) -> f64 {
    round_dp(
        (location.grid_price - cfg.green_price_per_kwh) * amount_kwh,
        2,
    )
}
