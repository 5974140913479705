//! Common types for synthetic series generation.

use chrono::NaiveDateTime;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One hourly reading of the synthetic energy series.
///
/// All quantities are rounded to two decimals. `surplus_kwh` is derived from
/// the rounded generation and consumption values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergySample {
    /// Local wall-clock time of the reading.
    pub timestamp: NaiveDateTime,
    /// Solar generation (kWh, >= 0).
    pub generation_kwh: f64,
    /// Household consumption (kWh).
    pub consumption_kwh: f64,
    /// `max(0, generation - consumption)` (kWh).
    pub surplus_kwh: f64,
    /// Clearing price for the hour (currency per kWh).
    pub price_per_kwh: f64,
}

/// Errors from series generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeriesError {
    /// Requested series length was zero.
    #[error("hours must be > 0, got {hours}")]
    InvalidHours { hours: usize },
    /// Requested series is longer than [`MAX_SERIES_HOURS`](super::MAX_SERIES_HOURS).
    #[error("hours must be <= {max}, got {hours}")]
    TooManyHours { hours: usize, max: usize },
    /// The series would start before the earliest representable timestamp.
    #[error("a {hours}-hour series cannot be represented from the given end time")]
    OutOfRange { hours: usize },
}

/// Rounds `value` to `places` decimal places (half away from zero).
pub fn round_dp(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

/// Draws uniform noise from `[-half_width, half_width)`.
///
/// Returns 0.0 when `half_width` is not positive.
pub fn uniform_jitter<R: Rng + ?Sized>(rng: &mut R, half_width: f64) -> f64 {
    if half_width <= 0.0 {
        return 0.0;
    }
    rng.random_range(-half_width..half_width)
}
