//! Synthetic hourly energy series.
//!
//! A series is built from three independent profiles (solar generation,
//! household consumption, clearing price). All randomness comes from the
//! caller-supplied RNG, so a seeded `StdRng` reproduces a series exactly.

/// Household consumption profile.
pub mod consumption;
/// Clearing-price profile.
pub mod price;
/// Solar generation profile and daylight envelope.
pub mod solar;
pub mod types;

use chrono::{NaiveDateTime, TimeDelta, Timelike};
use rand::Rng;

use crate::config::SeriesConfig;

pub use consumption::ConsumptionProfile;
pub use price::PriceProfile;
pub use solar::SolarProfile;
pub use types::{EnergySample, SeriesError, round_dp};

/// Longest series that can be generated in one call (one leap year of hours).
pub const MAX_SERIES_HOURS: usize = 24 * 366;

/// Builds hourly [`EnergySample`] series from the three profiles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesGenerator {
    pub solar: SolarProfile,
    pub consumption: ConsumptionProfile,
    pub price: PriceProfile,
}

impl SeriesGenerator {
    /// Builds a generator from the `[series]` configuration section.
    pub fn from_config(cfg: &SeriesConfig) -> Self {
        Self {
            solar: SolarProfile::new(
                cfg.peak_generation_kwh,
                cfg.generation_jitter_floor,
                cfg.generation_jitter_span,
            ),
            consumption: ConsumptionProfile::new(
                cfg.base_consumption_kwh,
                cfg.consumption_amplitude_kwh,
                cfg.consumption_jitter_kwh,
            ),
            price: PriceProfile::new(cfg.base_price_per_kwh, cfg.price_jitter),
        }
    }

    /// Generates `hours` hourly samples ending at `now`.
    ///
    /// Sample `i` (oldest first) is stamped `now - (hours - 1 - i)` hours and
    /// its profiles are evaluated at that timestamp's hour of day.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::InvalidHours`] if `hours` is zero,
    /// [`SeriesError::TooManyHours`] above [`MAX_SERIES_HOURS`], and
    /// [`SeriesError::OutOfRange`] if the first timestamp is not representable.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        hours: usize,
        now: NaiveDateTime,
        rng: &mut R,
    ) -> Result<Vec<EnergySample>, SeriesError> {
        if hours == 0 {
            return Err(SeriesError::InvalidHours { hours });
        }
        if hours > MAX_SERIES_HOURS {
            return Err(SeriesError::TooManyHours {
                hours,
                max: MAX_SERIES_HOURS,
            });
        }

        let lookback = i64::try_from(hours - 1)
            .ok()
            .and_then(TimeDelta::try_hours)
            .ok_or(SeriesError::OutOfRange { hours })?;
        let start = now
            .checked_sub_signed(lookback)
            .ok_or(SeriesError::OutOfRange { hours })?;

        let step = TimeDelta::hours(1);
        let mut samples = Vec::with_capacity(hours);
        let mut timestamp = start;
        for i in 0..hours {
            if i > 0 {
                timestamp += step;
            }
            samples.push(self.sample_at(timestamp, rng));
        }
        Ok(samples)
    }

    /// Generates a single sample for `timestamp`.
    pub fn sample_at<R: Rng + ?Sized>(&self, timestamp: NaiveDateTime, rng: &mut R) -> EnergySample {
        let hour = timestamp.hour();
        let generation = round_dp(self.solar.generation_kwh(hour, rng), 2);
        let consumption = round_dp(self.consumption.consumption_kwh(hour, rng), 2);
        let price = round_dp(self.price.price_per_kwh(rng), 2);

        EnergySample {
            timestamp,
            generation_kwh: generation,
            consumption_kwh: consumption,
            surplus_kwh: round_dp((generation - consumption).max(0.0), 2),
            price_per_kwh: price,
        }
    }
}

/// Generates `hours` samples ending at `now` with the default profiles.
///
/// # Errors
///
/// See [`SeriesGenerator::generate`].
pub fn generate_series<R: Rng + ?Sized>(
    hours: usize,
    now: NaiveDateTime,
    rng: &mut R,
) -> Result<Vec<EnergySample>, SeriesError> {
    SeriesGenerator::default().generate(hours, now, rng)
}

/// The most recent sample (at `now`), used for the real-time metrics.
pub fn latest_sample<R: Rng + ?Sized>(
    generator: &SeriesGenerator,
    now: NaiveDateTime,
    rng: &mut R,
) -> EnergySample {
    generator.sample_at(now, rng)
}
