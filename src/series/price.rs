use rand::Rng;

use super::types::uniform_jitter;

/// Hourly clearing price: a flat base with uniform jitter.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceProfile {
    /// Base price (currency per kWh).
    pub base_price: f64,
    /// Half-width of the additive jitter.
    pub jitter: f64,
}

impl PriceProfile {
    pub fn new(base_price: f64, jitter: f64) -> Self {
        Self {
            base_price,
            jitter: jitter.max(0.0),
        }
    }

    pub fn price_per_kwh<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.base_price + uniform_jitter(rng, self.jitter)
    }
}

impl Default for PriceProfile {
    fn default() -> Self {
        Self::new(4.0, 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn price_within_band() {
        let p = PriceProfile::default();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let v = p.price_per_kwh(&mut rng);
            assert!((3.5..4.5).contains(&v));
        }
    }
}
