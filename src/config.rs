//! TOML-based application configuration and preset definitions.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::market::order::{MAX_ORDER_KWH, MIN_ORDER_KWH};
use crate::series::{ConsumptionProfile, MAX_SERIES_HOURS};
use crate::session::UserType;

/// Top-level configuration parsed from TOML.
///
/// All fields have defaults matching the demo dashboard. Load from TOML with
/// [`AppConfig::from_toml_file`] or use [`AppConfig::demo`] for the built-in
/// default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Synthetic series parameters.
    #[serde(default)]
    pub series: SeriesConfig,
    /// Marketplace and derived-metric constants.
    #[serde(default)]
    pub market: MarketConfig,
    /// Initial session values.
    #[serde(default)]
    pub session: SessionConfig,
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Synthetic series parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeriesConfig {
    /// Length of the analytics series (hours, must be > 0).
    pub hours: usize,
    /// Fixed random seed; `None` draws a fresh seed per run.
    pub seed: Option<u64>,
    /// Generation at solar noon before jitter (kWh).
    pub peak_generation_kwh: f64,
    /// Lower bound of the generation jitter multiplier.
    pub generation_jitter_floor: f64,
    /// Width of the generation jitter multiplier range.
    pub generation_jitter_span: f64,
    /// Mean household consumption (kWh).
    pub base_consumption_kwh: f64,
    /// Diurnal consumption amplitude (kWh).
    pub consumption_amplitude_kwh: f64,
    /// Half-width of the consumption jitter (kWh).
    pub consumption_jitter_kwh: f64,
    /// Base clearing price (currency per kWh).
    pub base_price_per_kwh: f64,
    /// Half-width of the price jitter.
    pub price_jitter: f64,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            hours: 24,
            seed: None,
            peak_generation_kwh: 8.0,
            generation_jitter_floor: 0.8,
            generation_jitter_span: 0.4,
            base_consumption_kwh: 3.0,
            consumption_amplitude_kwh: 2.0,
            consumption_jitter_kwh: 0.5,
            base_price_per_kwh: 4.0,
            price_jitter: 0.5,
        }
    }
}

/// Marketplace and derived-metric constants.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarketConfig {
    /// Fixed price of community green energy (currency per kWh).
    pub green_price_per_kwh: f64,
    /// Share of surplus assumed sold when computing earnings (0.0-1.0).
    pub sellable_fraction: f64,
    /// CO2 avoided per kWh of solar energy (kg).
    pub carbon_offset_kg_per_kwh: f64,
    /// Battery charge level shown on the prosumer view (percent).
    pub battery_level_pct: f64,
    /// Preselected amount of the consumer buy form (kWh).
    pub default_order_kwh: u32,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            green_price_per_kwh: 4.25,
            sellable_fraction: 0.8,
            carbon_offset_kg_per_kwh: 0.5,
            battery_level_pct: 85.0,
            default_order_kwh: 10,
        }
    }
}

/// Initial session values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Display name of the demo user.
    pub user_name: String,
    /// Dashboard shown after login.
    pub user_type: UserType,
    /// Postal code used for location lookup.
    pub postal_code: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user_name: "Demo User".to_string(),
            user_type: UserType::Consumer,
            postal_code: "110001".to_string(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// TCP port for the API server.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"series.hours"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl AppConfig {
    /// Returns the demo configuration (same values as the dashboard).
    pub fn demo() -> Self {
        Self::default()
    }

    /// Returns the sunny preset: a Mumbai prosumer with a larger array.
    pub fn sunny() -> Self {
        Self {
            series: SeriesConfig {
                peak_generation_kwh: 12.0,
                ..SeriesConfig::default()
            },
            session: SessionConfig {
                user_type: UserType::Prosumer,
                postal_code: "400001".to_string(),
                ..SessionConfig::default()
            },
            ..Self::default()
        }
    }

    /// Returns the seeded preset: demo values with a fixed seed.
    pub fn seeded() -> Self {
        Self {
            series: SeriesConfig {
                seed: Some(42),
                ..SeriesConfig::default()
            },
            ..Self::default()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["demo", "sunny", "seeded"];

    /// Loads a configuration from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "demo" => Ok(Self::demo()),
            "sunny" => Ok(Self::sunny()),
            "seeded" => Ok(Self::seeded()),
            _ => Err(ConfigError::new(
                "preset",
                format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            )),
        }
    }

    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::new("config", format!("cannot read \"{}\": {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::new("toml", e.to_string()))
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let s = &self.series;
        if s.hours == 0 {
            errors.push(ConfigError::new("series.hours", "must be > 0"));
        } else if s.hours > MAX_SERIES_HOURS {
            errors.push(ConfigError::new(
                "series.hours",
                format!("must be <= {MAX_SERIES_HOURS}"),
            ));
        }
        for (field, value) in [
            ("series.peak_generation_kwh", s.peak_generation_kwh),
            ("series.generation_jitter_floor", s.generation_jitter_floor),
            ("series.generation_jitter_span", s.generation_jitter_span),
            ("series.consumption_jitter_kwh", s.consumption_jitter_kwh),
            ("series.price_jitter", s.price_jitter),
        ] {
            if !(value >= 0.0) {
                errors.push(ConfigError::new(field, "must be >= 0"));
            }
        }
        let consumption = ConsumptionProfile::new(
            s.base_consumption_kwh,
            s.consumption_amplitude_kwh,
            s.consumption_jitter_kwh,
        );
        if !(consumption.min_kwh() >= 0.0) {
            errors.push(ConfigError::new(
                "series.base_consumption_kwh",
                "must be >= consumption_amplitude_kwh + consumption_jitter_kwh",
            ));
        }
        if !(s.base_price_per_kwh > 0.0) {
            errors.push(ConfigError::new("series.base_price_per_kwh", "must be > 0"));
        }

        let m = &self.market;
        if !(m.green_price_per_kwh > 0.0) {
            errors.push(ConfigError::new("market.green_price_per_kwh", "must be > 0"));
        }
        if !(0.0..=1.0).contains(&m.sellable_fraction) {
            errors.push(ConfigError::new("market.sellable_fraction", "must be in [0.0, 1.0]"));
        }
        if !(m.carbon_offset_kg_per_kwh >= 0.0) {
            errors.push(ConfigError::new("market.carbon_offset_kg_per_kwh", "must be >= 0"));
        }
        if !(0.0..=100.0).contains(&m.battery_level_pct) {
            errors.push(ConfigError::new("market.battery_level_pct", "must be in [0, 100]"));
        }
        if !(MIN_ORDER_KWH..=MAX_ORDER_KWH).contains(&m.default_order_kwh) {
            errors.push(ConfigError::new(
                "market.default_order_kwh",
                format!("must be in [{MIN_ORDER_KWH}, {MAX_ORDER_KWH}]"),
            ));
        }

        let sess = &self.session;
        if sess.user_name.trim().is_empty() {
            errors.push(ConfigError::new("session.user_name", "must not be empty"));
        }
        if sess.postal_code.chars().count() > crate::session::POSTAL_CODE_MAX_CHARS {
            errors.push(ConfigError::new(
                "session.postal_code",
                format!(
                    "must be at most {} characters",
                    crate::session::POSTAL_CODE_MAX_CHARS
                ),
            ));
        }

        errors
    }
}
