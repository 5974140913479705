use std::f64::consts::PI;

use rand::Rng;

/// First hour of day (inclusive) with non-zero generation.
pub const SUNRISE_HOUR: u32 = 6;
/// Last hour of day (inclusive) of the daylight envelope.
pub const SUNSET_HOUR: u32 = 18;

/// Half-sine daylight envelope for an hour of day.
///
/// Rises from 0 at sunrise to 1 at solar noon and back to 0 at sunset.
/// Returns 0.0 outside `SUNRISE_HOUR..=SUNSET_HOUR`.
pub fn daylight_factor(hour_of_day: u32) -> f64 {
    if !(SUNRISE_HOUR..=SUNSET_HOUR).contains(&hour_of_day) {
        return 0.0;
    }
    let span = f64::from(SUNSET_HOUR - SUNRISE_HOUR);
    let x = PI * f64::from(hour_of_day - SUNRISE_HOUR) / span;
    x.sin().max(0.0)
}

/// Rooftop solar generation profile.
///
/// Generation is the daylight envelope scaled by `peak_kwh`, times a
/// multiplicative jitter drawn uniformly from `[floor, floor + span)`.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarProfile {
    /// Generation at solar noon before jitter (kWh).
    pub peak_kwh: f64,
    /// Lower bound of the jitter multiplier.
    pub jitter_floor: f64,
    /// Width of the jitter multiplier range.
    pub jitter_span: f64,
}

impl SolarProfile {
    /// Creates a solar profile. Negative inputs are clamped to zero.
    pub fn new(peak_kwh: f64, jitter_floor: f64, jitter_span: f64) -> Self {
        Self {
            peak_kwh: peak_kwh.max(0.0),
            jitter_floor: jitter_floor.max(0.0),
            jitter_span: jitter_span.max(0.0),
        }
    }

    /// Generation for one hour (kWh, >= 0).
    ///
    /// Draws from `rng` only during daylight.
    pub fn generation_kwh<R: Rng + ?Sized>(&self, hour_of_day: u32, rng: &mut R) -> f64 {
        let frac = daylight_factor(hour_of_day);
        if frac <= 0.0 {
            return 0.0;
        }
        let mult = self.jitter_floor + self.jitter_span * rng.random::<f64>();
        (self.peak_kwh * frac * mult).max(0.0)
    }
}

impl Default for SolarProfile {
    fn default() -> Self {
        Self::new(8.0, 0.8, 0.4)
    }
}
