use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::metrics::{carbon_offset_kg, savings};
use crate::config::MarketConfig;
use crate::location::LocationRecord;
use crate::series::{EnergySample, round_dp};

/// Smallest amount accepted by the buy form (kWh).
pub const MIN_ORDER_KWH: u32 = 1;
/// Largest amount accepted by the buy form (kWh).
pub const MAX_ORDER_KWH: u32 = 50;

/// Errors from the order flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("order amount {amount} kWh is outside [{min}, {max}]")]
    AmountOutOfRange { amount: u32, min: u32, max: u32 },
}

/// Price breakdown for a green-energy purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub amount_kwh: u32,
    pub price_per_kwh: f64,
    pub co2_offset_kg: f64,
    pub total_cost: f64,
    /// Savings against buying the same amount at the local grid price.
    pub savings_vs_grid: f64,
}

impl OrderSummary {
    /// Message shown after "Buy Now". The order is not recorded anywhere.
    pub fn confirmation(&self) -> String {
        format!(
            "Order placed successfully! You'll save \u{20b9}{:.2} compared to grid price.",
            self.savings_vs_grid
        )
    }
}

/// Quotes a purchase of `amount_kwh` of green energy at the configured price.
///
/// # Errors
///
/// Returns [`OrderError::AmountOutOfRange`] unless
/// `MIN_ORDER_KWH <= amount_kwh <= MAX_ORDER_KWH`.
pub fn quote_order(
    amount_kwh: u32,
    location: &LocationRecord,
    cfg: &MarketConfig,
) -> Result<OrderSummary, OrderError> {
    if !(MIN_ORDER_KWH..=MAX_ORDER_KWH).contains(&amount_kwh) {
        return Err(OrderError::AmountOutOfRange {
            amount: amount_kwh,
            min: MIN_ORDER_KWH,
            max: MAX_ORDER_KWH,
        });
    }
    let amount = f64::from(amount_kwh);
    Ok(OrderSummary {
        amount_kwh,
        price_per_kwh: cfg.green_price_per_kwh,
        co2_offset_kg: carbon_offset_kg(amount, cfg),
        total_cost: round_dp(amount * cfg.green_price_per_kwh, 2),
        savings_vs_grid: savings(location, amount, cfg),
    })
}

/// Message shown after a prosumer lists their current surplus.
pub fn sell_surplus_message(sample: &EnergySample) -> String {
    format!(
        "Surplus energy ({:.1} kWh) listed for sale!",
        sample.surplus_kwh
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::resolve;
    use chrono::NaiveDate;

    #[test]
    fn ten_kwh_in_delhi() {
        let q = quote_order(10, &resolve("110001"), &MarketConfig::default());
        let q = q.expect("10 kWh is in range");
        assert_eq!(q.amount_kwh, 10);
        assert_eq!(q.price_per_kwh, 4.25);
        assert_eq!(q.total_cost, 42.5);
        assert_eq!(q.co2_offset_kg, 5.0);
        assert_eq!(q.savings_vs_grid, 29.5);
        assert_eq!(
            q.confirmation(),
            "Order placed successfully! You'll save \u{20b9}29.50 compared to grid price."
        );
    }

    #[test]
    fn slider_bounds_are_inclusive() {
        let loc = resolve("110001");
        let cfg = MarketConfig::default();
        assert!(quote_order(MIN_ORDER_KWH, &loc, &cfg).is_ok());
        assert!(quote_order(MAX_ORDER_KWH, &loc, &cfg).is_ok());
        assert_eq!(
            quote_order(0, &loc, &cfg),
            Err(OrderError::AmountOutOfRange {
                amount: 0,
                min: 1,
                max: 50
            })
        );
        assert!(quote_order(51, &loc, &cfg).is_err());
    }

    #[test]
    fn sell_message_formats_surplus() {
        let sample = EnergySample {
            timestamp: NaiveDate::from_ymd_opt(2024, 6, 1)
                .and_then(|d| d.and_hms_opt(12, 0, 0))
                .expect("valid timestamp"),
            generation_kwh: 7.5,
            consumption_kwh: 3.19,
            surplus_kwh: 4.31,
            price_per_kwh: 4.1,
        };
        assert_eq!(
            sell_surplus_message(&sample),
            "Surplus energy (4.3 kWh) listed for sale!"
        );
    }
}
