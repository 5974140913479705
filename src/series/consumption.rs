use std::f64::consts::PI;

use rand::Rng;

use super::types::uniform_jitter;

/// Household consumption profile.
///
/// `base_kwh + amplitude_kwh * sin(pi * h / 12)` plus uniform additive jitter
/// of `±jitter_kwh`. The curve is independent of daylight.
///
/// The result is not clamped. With the default parameters the lowest
/// attainable value is `3 - 2 - 0.5 = 0.5` kWh (at 18:00), so it stays
/// positive. Configurations whose [`min_kwh`](Self::min_kwh) is negative are
/// rejected by `AppConfig::validate`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsumptionProfile {
    /// Mean consumption (kWh).
    pub base_kwh: f64,
    /// Diurnal swing amplitude (kWh).
    pub amplitude_kwh: f64,
    /// Half-width of the additive jitter (kWh).
    pub jitter_kwh: f64,
}

impl ConsumptionProfile {
    pub fn new(base_kwh: f64, amplitude_kwh: f64, jitter_kwh: f64) -> Self {
        Self {
            base_kwh,
            amplitude_kwh,
            jitter_kwh: jitter_kwh.max(0.0),
        }
    }

    /// Deterministic part of the curve for an hour of day.
    pub fn mean_kwh(&self, hour_of_day: u32) -> f64 {
        let angle = PI * f64::from(hour_of_day) / 12.0;
        self.base_kwh + self.amplitude_kwh * angle.sin()
    }

    /// Consumption for one hour (kWh).
    pub fn consumption_kwh<R: Rng + ?Sized>(&self, hour_of_day: u32, rng: &mut R) -> f64 {
        self.mean_kwh(hour_of_day) + uniform_jitter(rng, self.jitter_kwh)
    }

    /// Lowest value the profile can produce.
    pub fn min_kwh(&self) -> f64 {
        self.base_kwh - self.amplitude_kwh.abs() - self.jitter_kwh
    }
}

impl Default for ConsumptionProfile {
    fn default() -> Self {
        Self::new(3.0, 2.0, 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn mean_curve_peaks_at_six_and_dips_at_eighteen() {
        let c = ConsumptionProfile::default();
        assert!((c.mean_kwh(0) - 3.0).abs() < 1e-12);
        assert!((c.mean_kwh(6) - 5.0).abs() < 1e-12);
        assert!((c.mean_kwh(18) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn default_profile_never_negative() {
        let c = ConsumptionProfile::default();
        assert!((c.min_kwh() - 0.5).abs() < 1e-12);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            for h in 0..24 {
                let v = c.consumption_kwh(h, &mut rng);
                assert!(v >= 0.5 - 1e-12, "consumption {v} at {h}h");
            }
        }
    }

    #[test]
    fn zero_jitter_matches_mean() {
        let c = ConsumptionProfile::new(3.0, 2.0, 0.0);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(c.consumption_kwh(9, &mut rng), c.mean_kwh(9));
    }
}
