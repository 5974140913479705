//! Dashboard assembly for a session.
//!
//! [`render`] recomputes every figure from scratch on each call; nothing is
//! cached between renders.

use std::fmt;

use chrono::NaiveDateTime;
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use crate::config::AppConfig;
use crate::location::LocationRecord;
use crate::market::metrics::{carbon_offset_kg, earnings, savings_per_kwh};
use crate::market::order::sell_surplus_message;
use crate::market::{MarketplaceListing, OrderError, OrderSummary, quote_order, synthesize_listings};
use crate::series::{EnergySample, SeriesError, SeriesGenerator, latest_sample};
use crate::session::{Session, UserType};

/// Errors from assembling a dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Series(#[from] SeriesError),
    #[error(transparent)]
    Order(#[from] OrderError),
}

/// Page shown to a logged-out visitor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LandingView {
    pub title: String,
    pub tagline: String,
    pub features: Vec<String>,
}

impl Default for LandingView {
    fn default() -> Self {
        Self {
            title: "Welcome to Energy Nexus".to_string(),
            tagline: "Smart Energy Trading Platform for a Sustainable Future".to_string(),
            features: vec![
                "Go Green - Purchase solar energy from local producers".to_string(),
                "Earn Money - Sell your solar surplus to the community".to_string(),
                "Track Impact - Monitor your carbon footprint reduction".to_string(),
            ],
        }
    }
}

/// Prosumer metrics and analytics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProsumerView {
    pub greeting: String,
    pub location: LocationRecord,
    /// Real-time reading the metric cards are derived from.
    pub latest: EnergySample,
    pub earnings: f64,
    pub battery_level_pct: f64,
    pub carbon_offset_kg: f64,
    /// Hourly analytics series ending at render time.
    pub hourly: Vec<EnergySample>,
    pub sell_message: String,
}

/// Consumer price comparison, buy form, and marketplace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsumerView {
    pub greeting: String,
    pub location: LocationRecord,
    pub green_price_per_kwh: f64,
    pub grid_price_per_kwh: f64,
    pub savings_per_kwh: f64,
    /// Quote for the preselected buy amount.
    pub order: OrderSummary,
    pub listings: Vec<MarketplaceListing>,
}

/// Everything a session's page displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum DashboardView {
    Landing(LandingView),
    Prosumer(ProsumerView),
    Consumer(ConsumerView),
}

/// Builds the view for `session` at time `now`.
///
/// # Errors
///
/// Returns [`DashboardError`] if the configured series length is zero or the
/// configured default order amount is out of range.
pub fn render<R: Rng + ?Sized>(
    session: &Session,
    cfg: &AppConfig,
    now: NaiveDateTime,
    rng: &mut R,
) -> Result<DashboardView, DashboardError> {
    if !session.is_logged_in {
        return Ok(DashboardView::Landing(LandingView::default()));
    }

    let location = session.location();
    let greeting = format!("Welcome back, {}!", session.first_name());
    tracing::debug!(
        user_type = %session.user_type,
        postal_code = %session.postal_code,
        city = %location.city,
        "rendering dashboard"
    );

    let view = match session.user_type {
        UserType::Prosumer => {
            let generator = SeriesGenerator::from_config(&cfg.series);
            let latest = latest_sample(&generator, now, rng);
            let hourly = generator.generate(cfg.series.hours, now, rng)?;
            DashboardView::Prosumer(ProsumerView {
                greeting,
                earnings: earnings(&latest, &cfg.market),
                battery_level_pct: cfg.market.battery_level_pct,
                carbon_offset_kg: carbon_offset_kg(latest.generation_kwh, &cfg.market),
                sell_message: sell_surplus_message(&latest),
                location,
                latest,
                hourly,
            })
        }
        UserType::Consumer => {
            let order = quote_order(cfg.market.default_order_kwh, &location, &cfg.market)?;
            let listings = synthesize_listings(&location, rng);
            DashboardView::Consumer(ConsumerView {
                greeting,
                green_price_per_kwh: cfg.market.green_price_per_kwh,
                grid_price_per_kwh: location.grid_price,
                savings_per_kwh: savings_per_kwh(&location, &cfg.market),
                location,
                order,
                listings,
            })
        }
    };
    Ok(view)
}

impl DashboardView {
    /// The hourly analytics series shown on the page, if the view has one.
    pub fn hourly(&self) -> Option<&[EnergySample]> {
        match self {
            Self::Prosumer(v) => Some(&v.hourly),
            Self::Landing(_) | Self::Consumer(_) => None,
        }
    }
}

/// Series to export alongside a rendered view.
///
/// A prosumer view already carries its analytics series, which is returned
/// as is so the export matches the page. Other views get a fresh series from
/// `rng`.
///
/// # Errors
///
/// Returns [`SeriesError`] if a fresh series cannot be generated.
pub fn export_series<R: Rng + ?Sized>(
    view: &DashboardView,
    cfg: &AppConfig,
    now: NaiveDateTime,
    rng: &mut R,
) -> Result<Vec<EnergySample>, SeriesError> {
    match view.hourly() {
        Some(hourly) => Ok(hourly.to_vec()),
        None => SeriesGenerator::from_config(&cfg.series).generate(cfg.series.hours, now, rng),
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Landing(v) => {
                writeln!(f, "=== {} ===", v.title)?;
                writeln!(f, "{}", v.tagline)?;
                for feature in &v.features {
                    writeln!(f, "  * {feature}")?;
                }
                Ok(())
            }
            Self::Prosumer(v) => {
                writeln!(f, "=== {} ===", v.greeting)?;
                writeln!(f, "--- Prosumer Dashboard ({}) ---", v.location.display_location())?;
                writeln!(f, "Generation:     {:.1} kWh", v.latest.generation_kwh)?;
                writeln!(f, "Earnings:       \u{20b9}{:.0}", v.earnings)?;
                writeln!(f, "Battery:        {:.0}%", v.battery_level_pct)?;
                writeln!(f, "Carbon offset:  {:.1} kg", v.carbon_offset_kg)?;
                writeln!(f, "\n--- Energy Analytics ({}h) ---", v.hourly.len())?;
                for s in &v.hourly {
                    writeln!(
                        f,
                        "{} | gen={:>5.2}  use={:>5.2}  surplus={:>5.2} kWh | price={:.2}",
                        s.timestamp.format("%m-%d %H:%M"),
                        s.generation_kwh,
                        s.consumption_kwh,
                        s.surplus_kwh,
                        s.price_per_kwh,
                    )?;
                }
                write!(f, "\n{}", v.sell_message)
            }
            Self::Consumer(v) => {
                writeln!(f, "=== {} ===", v.greeting)?;
                writeln!(f, "--- Consumer Dashboard ({}) ---", v.location.display_location())?;
                writeln!(f, "Green energy:       \u{20b9}{:.2}/kWh", v.green_price_per_kwh)?;
                writeln!(f, "Grid price:         \u{20b9}{:.2}/kWh", v.grid_price_per_kwh)?;
                writeln!(f, "Potential savings:  \u{20b9}{:.2}/kWh", v.savings_per_kwh)?;
                writeln!(f, "\n--- Order Summary ---")?;
                writeln!(f, "Energy amount:  {} kWh", v.order.amount_kwh)?;
                writeln!(f, "Price per kWh:  \u{20b9}{:.2}", v.order.price_per_kwh)?;
                writeln!(f, "CO2 offset:     {:.1} kg", v.order.co2_offset_kg)?;
                writeln!(f, "Total cost:     \u{20b9}{:.2}", v.order.total_cost)?;
                writeln!(f, "\n--- Energy Marketplace ---")?;
                for l in &v.listings {
                    writeln!(f, "{l}")?;
                }
                Ok(())
            }
        }
    }
}
