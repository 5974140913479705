use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::location::LocationRecord;
use crate::series::round_dp;
use crate::series::types::uniform_jitter;

/// Number of listings in every synthesized marketplace.
pub const LISTING_COUNT: usize = 5;

const BASE_AMOUNT_KWH: u32 = 20;
const AMOUNT_STEP_KWH: u32 = 5;
const TOP_PRICE_PER_KWH: f64 = 4.25;
const PRICE_STEP_PER_KWH: f64 = 0.15;
const BASE_RATING: f64 = 4.5;
const RATING_JITTER: f64 = 0.5;
const BASE_DISTANCE_KM: f64 = 2.5;
const DISTANCE_STEP_KM: f64 = 0.7;

/// Time left on an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRemaining {
    pub hours: u32,
    pub minutes: u32,
}

impl fmt::Display for TimeRemaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

/// A seller's offer on the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketplaceListing {
    pub seller: String,
    /// Seller rating, one decimal, in `[1, 5]`.
    pub rating: f64,
    /// `"City, State"` of the seller.
    pub location: String,
    pub amount_kwh: u32,
    pub price_per_kwh: f64,
    /// `amount_kwh * price_per_kwh`, rounded to two decimals.
    pub total_price: f64,
    pub time_remaining: TimeRemaining,
    pub distance_km: f64,
}

impl fmt::Display for MarketplaceListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<28} {:>3.1}* | {:>3} kWh @ {:>5.2}/kWh = {:>7.2} | {} left | {:.1} km | {}",
            self.seller,
            self.rating,
            self.amount_kwh,
            self.price_per_kwh,
            self.total_price,
            self.time_remaining,
            self.distance_km,
            self.location,
        )
    }
}

fn seller_names(location: &LocationRecord) -> [String; LISTING_COUNT] {
    [
        format!("{} Solar Co-op", location.city),
        format!("{} Green Energy", location.district),
        "Regional Solar Farm".to_string(),
        "EcoPower Solutions".to_string(),
        "SunTech Energy".to_string(),
    ]
}

/// Builds the five marketplace listings for a location.
///
/// Listing `i` offers `20 + 5i` kWh at `4.25 - 0.15i` per kWh, so prices
/// strictly decrease and amounts strictly increase with the index. Rating
/// and minutes remaining are drawn from `rng`.
pub fn synthesize_listings<R: Rng + ?Sized>(
    location: &LocationRecord,
    rng: &mut R,
) -> Vec<MarketplaceListing> {
    let place = location.display_location();
    seller_names(location)
        .into_iter()
        .zip(0_u32..)
        .map(|(seller, i)| {
            let amount_kwh = BASE_AMOUNT_KWH + AMOUNT_STEP_KWH * i;
            let price_per_kwh = round_dp(TOP_PRICE_PER_KWH - PRICE_STEP_PER_KWH * f64::from(i), 2);
            let rating = round_dp(BASE_RATING + uniform_jitter(rng, RATING_JITTER), 1).clamp(1.0, 5.0);
            MarketplaceListing {
                seller,
                rating,
                location: place.clone(),
                amount_kwh,
                price_per_kwh,
                total_price: round_dp(f64::from(amount_kwh) * price_per_kwh, 2),
                time_remaining: TimeRemaining {
                    hours: 2 + i % 3,
                    minutes: rng.random_range(0..=59),
                },
                distance_km: round_dp(BASE_DISTANCE_KM + DISTANCE_STEP_KM * f64::from(i), 1),
            }
        })
        .collect()
}

/// Confirmation shown after buying a listing. Nothing is recorded.
pub fn purchase_listing(listing: &MarketplaceListing) -> String {
    format!(
        "Purchase initiated for {} kWh from {}!",
        listing.amount_kwh, listing.seller
    )
}
